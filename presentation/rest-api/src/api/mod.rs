pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}

pub mod catalog {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod combination {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod daily_menu {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod template {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
