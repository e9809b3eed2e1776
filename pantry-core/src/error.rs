use thiserror::Error;

/// A single reason a recipe was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must be at least {0} characters long")]
    TitleTooShort(usize),

    #[error("Category must be selected")]
    MissingCategory,

    #[error("Ingredients must be at least {0} characters long")]
    IngredientsTooShort(usize),

    #[error("Instructions must be at least {0} characters long")]
    InstructionsTooShort(usize),

    #[error("Cooking time must be at least {0} minute")]
    CookingTimeTooShort(u32),
}

/// Every reason a recipe was rejected, in field order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
