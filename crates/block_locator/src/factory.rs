// crates/block_locator/src/factory.rs

/// Which enclosing block-start an indented line anchors at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorPolicy {
    /// The nearest top-level block-start above the line.
    #[default]
    Outermost,
    /// The line itself if it opens a block, else its nearest shallower block-start.
    Innermost,
}

pub(crate) fn create_block_locator(policy: AnchorPolicy) -> Box<dyn crate::traits::BlockLocator> {
    match policy {
        AnchorPolicy::Outermost => Box::new(crate::default::OutermostBlockLocator),
        AnchorPolicy::Innermost => Box::new(crate::default::InnermostBlockLocator),
    }
}
