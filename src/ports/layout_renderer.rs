use crate::domain::{AppError, PromptStyle, SectionView};

/// Port for laying out builder sections in a prompt style.
pub trait LayoutRenderer {
    fn render(&self, style: PromptStyle, sections: &[SectionView]) -> Result<String, AppError>;
}
