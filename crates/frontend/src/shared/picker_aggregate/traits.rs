use contracts::domain::common::EntityId;

/// Base trait for items chosen through a picker
pub trait AggregatePickerResult {
    fn id(&self) -> EntityId;
    fn display_name(&self) -> String;
}

/// Items rendered as picker table rows
pub trait TableDisplayable: AggregatePickerResult {
    fn headers() -> &'static [&'static str];

    /// One value per header.
    fn cells(&self) -> Vec<String>;

    /// Local search; `needle` is already lower-case.
    fn matches_search(&self, needle: &str) -> bool {
        self.display_name().to_lowercase().contains(needle)
    }
}
