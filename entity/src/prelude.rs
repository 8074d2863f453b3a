pub use super::pet::Entity as Pet;
