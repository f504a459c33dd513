use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five real menu sections, in wizard order.
///
/// The ordinal drives step arithmetic; never index categories by array position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Entradas,
    Principios,
    Proteinas,
    Acompanamientos,
    Bebidas,
}

const ENTRADAS_EXTERNAL_ID: Uuid = Uuid::from_u128(0x4f1c2a7e_91d3_4b8a_a2f0_6d3e8c1b0001);
const PRINCIPIOS_EXTERNAL_ID: Uuid = Uuid::from_u128(0x4f1c2a7e_91d3_4b8a_a2f0_6d3e8c1b0002);
const PROTEINAS_EXTERNAL_ID: Uuid = Uuid::from_u128(0x4f1c2a7e_91d3_4b8a_a2f0_6d3e8c1b0003);
const ACOMPANAMIENTOS_EXTERNAL_ID: Uuid = Uuid::from_u128(0x4f1c2a7e_91d3_4b8a_a2f0_6d3e8c1b0004);
const BEBIDAS_EXTERNAL_ID: Uuid = Uuid::from_u128(0x4f1c2a7e_91d3_4b8a_a2f0_6d3e8c1b0005);

/// Planned portions seeded when a proteína is first selected.
pub const DEFAULT_PROTEIN_QUANTITY: u32 = 10;

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Entradas,
        MenuCategory::Principios,
        MenuCategory::Proteinas,
        MenuCategory::Acompanamientos,
        MenuCategory::Bebidas,
    ];

    pub fn ordinal(self) -> usize {
        match self {
            MenuCategory::Entradas => 0,
            MenuCategory::Principios => 1,
            MenuCategory::Proteinas => 2,
            MenuCategory::Acompanamientos => 3,
            MenuCategory::Bebidas => 4,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Client-side identifier, 1-based.
    pub fn local_id(self) -> u8 {
        self.ordinal() as u8 + 1
    }

    pub fn from_local_id(local_id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.local_id() == local_id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MenuCategory::Entradas => "Entradas",
            MenuCategory::Principios => "Principios",
            MenuCategory::Proteinas => "Proteínas",
            MenuCategory::Acompanamientos => "Acompañamientos",
            MenuCategory::Bebidas => "Bebidas",
        }
    }

    /// Identifier of the category in the product catalog.
    pub fn external_id(self) -> Uuid {
        match self {
            MenuCategory::Entradas => ENTRADAS_EXTERNAL_ID,
            MenuCategory::Principios => PRINCIPIOS_EXTERNAL_ID,
            MenuCategory::Proteinas => PROTEINAS_EXTERNAL_ID,
            MenuCategory::Acompanamientos => ACOMPANAMIENTOS_EXTERNAL_ID,
            MenuCategory::Bebidas => BEBIDAS_EXTERNAL_ID,
        }
    }

    pub fn from_external_id(external_id: Uuid) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.external_id() == external_id)
    }

    /// Matches a free-text category name such as the ones carried by usage history rows.
    /// Comparison ignores case, surrounding whitespace and Spanish accents.
    pub fn from_display_name(name: &str) -> Option<Self> {
        let wanted = fold(name);
        Self::ALL
            .into_iter()
            .find(|c| fold(c.display_name()) == wanted || fold(c.slug()) == wanted)
    }

    pub fn slug(self) -> &'static str {
        match self {
            MenuCategory::Entradas => "entradas",
            MenuCategory::Principios => "principios",
            MenuCategory::Proteinas => "proteinas",
            MenuCategory::Acompanamientos => "acompanamientos",
            MenuCategory::Bebidas => "bebidas",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MenuCategory::Entradas => "soup",
            MenuCategory::Principios => "rice-bowl",
            MenuCategory::Proteinas => "drumstick",
            MenuCategory::Acompanamientos => "salad",
            MenuCategory::Bebidas => "cup",
        }
    }

    pub fn default_planned_quantity(self) -> u32 {
        match self {
            MenuCategory::Proteinas => DEFAULT_PROTEIN_QUANTITY,
            MenuCategory::Principios => 20,
            MenuCategory::Entradas | MenuCategory::Acompanamientos | MenuCategory::Bebidas => 15,
        }
    }

    /// Default menu price suggested by the category picker, in whole pesos.
    pub fn default_price(self) -> f64 {
        match self {
            MenuCategory::Entradas => 3000.0,
            MenuCategory::Principios => 4000.0,
            MenuCategory::Proteinas => 8000.0,
            MenuCategory::Acompanamientos => 2000.0,
            MenuCategory::Bebidas => 2500.0,
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s).ok_or_else(|| format!("Invalid menu category: {}", s))
    }
}

fn fold(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Position of the menu wizard: one step per category plus the final review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Category(MenuCategory),
    /// Synthetic pseudo-category without catalog products.
    FinalConfiguration,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Category(MenuCategory::Entradas);
    pub const LAST_INDEX: usize = MenuCategory::ALL.len();

    pub fn index(self) -> usize {
        match self {
            WizardStep::Category(category) => category.ordinal(),
            WizardStep::FinalConfiguration => Self::LAST_INDEX,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index == Self::LAST_INDEX {
            return Some(WizardStep::FinalConfiguration);
        }
        MenuCategory::from_ordinal(index).map(WizardStep::Category)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn category(self) -> Option<MenuCategory> {
        match self {
            WizardStep::Category(category) => Some(category),
            WizardStep::FinalConfiguration => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WizardStep::Category(category) => category.display_name(),
            WizardStep::FinalConfiguration => "Configuración final",
        }
    }

    pub fn external_id(self) -> Option<Uuid> {
        self.category().map(MenuCategory::external_id)
    }
}
