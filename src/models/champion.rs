/// A selectable champion. The roster in `data::champions` is the only source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Champion {
    /// Stable key, also used in portrait URLs (e.g. `"MonkeyKing"`).
    pub id: &'static str,
    pub name: &'static str,
    /// `#rrggbb`
    pub color: &'static str,
}
