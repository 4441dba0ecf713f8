/// Language used for recommendation texts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// 0 prints everything, 1 hides banner and headers, 2 prints results only.
    pub quiet: u8,
    pub no_banner: bool,
    pub language: Language,
    /// Seeds the activity picker so routines can be reproduced.
    ///
    /// `None` draws the seed from the operating system.
    pub seed: Option<u64>,
}
