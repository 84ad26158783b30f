/// Centered block: `~~~` ... `~~~`.
pub struct CenterFence;

impl CenterFence {
    pub const TILDES: &'static str = "~~~";
}
