use target_rings::ReferenceId;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Tapped(ReferenceId),
    ConfigReload,
}
