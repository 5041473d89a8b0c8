#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub status: ExtractionPhase,
    pub result_text: Option<String>,
    pub error_message: Option<String>,
    pub copied: bool,
    pub install_available: bool,
    pub install_prompting: bool,
    pub installed: bool,
    pub dirty: bool,
}
