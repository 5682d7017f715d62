/// Independently togglable aggressiveness switches for extraction. All on by
/// default; read-only for the duration of one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningFlags {
    /// Skip candidates whose class/id looks like comments, sidebars, footers.
    pub strip_unlikelys: bool,
    /// Let class/id patterns adjust candidate scores.
    pub weight_classes: bool,
    /// Apply the aggressive boilerplate pass inside the selected article root.
    /// The reader runs with this off: it misclassifies captions, figures and
    /// short trailing paragraphs as noise.
    pub clean_conditionally: bool,
}

impl Default for CleaningFlags {
    fn default() -> Self {
        Self {
            strip_unlikelys: true,
            weight_classes: true,
            clean_conditionally: true,
        }
    }
}

impl CleaningFlags {
    pub fn without_conditional_cleaning(mut self) -> Self {
        self.clean_conditionally = false;
        self
    }
}
