
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The entry was set up; generate the theme once.
    Setup,
    /// The options record changed on disk.
    OptionsChanged,
}
