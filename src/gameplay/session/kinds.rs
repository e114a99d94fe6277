//! Food and customer kinds, plus the slot and id newtypes shared by the session.

use bevy::reflect::Reflect;
use rand::Rng;

/// Everything the kitchen can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Pizza,
    Burger,
    Fries,
    Donut,
    Salad,
}

impl FoodKind {
    /// All food kinds, for uniform random draws.
    pub const ALL: [Self; 5] = [
        Self::Pizza,
        Self::Burger,
        Self::Fries,
        Self::Donut,
        Self::Salad,
    ];

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pizza => "Pizza",
            Self::Burger => "Burger",
            Self::Fries => "Fries",
            Self::Donut => "Donut",
            Self::Salad => "Salad",
        }
    }

    /// Pick a kind uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// The animals that come in to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerKind {
    Dog,
    Cat,
    Rabbit,
    Fox,
}

impl CustomerKind {
    pub const ALL: [Self; 4] = [Self::Dog, Self::Cat, Self::Rabbit, Self::Fox];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rabbit => "Rabbit",
            Self::Fox => "Fox",
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Index of a cabinet where food appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoodSlot(pub usize);

/// Index of a counter spot where customers wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerSlot(pub usize);

/// Session-unique identity of a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub struct FoodId(pub u32);

/// Session-unique identity of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub struct CustomerId(pub u32);
