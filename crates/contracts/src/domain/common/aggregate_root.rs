use super::EntityMetadata;

/// Aggregate root: instance accessors plus static naming metadata used by
/// the UI (titles) and the database (table names).
pub trait AggregateRoot {
    type Id;

    fn id(&self) -> Self::Id;

    /// Business code, e.g. "CAT-0001"
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Aggregate index, e.g. "a001"
    fn aggregate_index() -> &'static str;

    /// Collection name used in routes and tables, e.g. "category"
    fn collection_name() -> &'static str;

    /// Singular UI name, e.g. "Categoría"
    fn element_name() -> &'static str;

    /// Plural UI name, e.g. "Categorías"
    fn list_name() -> &'static str;

    /// Prefix of generated business codes, e.g. "CAT"
    fn code_prefix() -> &'static str;

    /// "a001_category"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Generates a business code from a running number: `CAT-0007`.
    fn generate_code(seq: u64) -> String {
        format!("{}-{:04}", Self::code_prefix(), seq)
    }
}
