/// Per-subsystem state records. Each subsystem owns its state independently;
/// nothing couples one record to another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmplifierState {
    pub powered: bool,
    pub volume: u8,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectorState {
    pub running: bool,
    pub input: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    pub lowered: bool,
}
