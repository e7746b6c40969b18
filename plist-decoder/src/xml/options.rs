/*!
 Settings that control how lenient the property list reader is.
*/

/// Default limit for [`DecodeOptions::max_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// What to do with an element inside a `<dict>` or `<array>` that does not name a value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    /// Consume the element and everything inside it, then carry on without storing a value.
    /// In a `<dict>`, the key that preceded it is dropped as well.
    #[default]
    Skip,
    /// Fail with [`FormatError::UnknownValueTag`](crate::error::plist::FormatError::UnknownValueTag)
    Reject,
}

impl UnknownTagPolicy {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(policy: &str) -> Option<Self> {
        match policy.to_lowercase().as_str() {
            "skip" => Some(Self::Skip),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Options for a [`PlistDecoder`](crate::PlistDecoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub unknown_tags: UnknownTagPolicy,
    /// Deepest allowed nesting of `<dict>` and `<array>` elements, counting the root as 1.
    /// A limit of `0` is treated as `1`, since a root container always needs one level.
    pub max_depth: usize,
}

impl DecodeOptions {
    pub fn unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    /// Set the nesting limit, raising `0` to `1`
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unknown_tags: UnknownTagPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
