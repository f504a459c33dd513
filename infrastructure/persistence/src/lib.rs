pub mod db;
pub mod numeric;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod usage_history {
    pub mod entity;
    pub mod repository;
}
pub mod daily_menu {
    pub mod entity;
    pub mod repository;
}
pub mod combination {
    pub mod entity;
    pub mod repository;
}
pub mod template {
    pub mod entity;
    pub mod repository;
}
