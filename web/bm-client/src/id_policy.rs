/// What the submission form does with the provisional id it generates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Send the provisional id with the insert; the store keeps it as the
    /// row id, so the feed echo lands on the optimistic entry.
    #[default]
    PassThrough,
    /// Insert without an id and let the store assign one. The feed echo
    /// then carries an id the list has never seen and shows up as a second
    /// entry next to the provisional one.
    Discard,
}
