use super::AggregateRoot;

/// Replace the element with the same id, or append it when it is new.
///
/// Returns `true` when an existing element was replaced.
pub fn upsert_by_id<T>(items: &mut Vec<T>, item: T) -> bool
where
    T: AggregateRoot,
    T::Id: PartialEq,
{
    let id = item.id();
    match items.iter_mut().find(|existing| existing.id() == id) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => {
            items.push(item);
            false
        }
    }
}

/// Remove the element with the given id. Returns `true` if something was removed.
pub fn remove_by_id<T>(items: &mut Vec<T>, id: &T::Id) -> bool
where
    T: AggregateRoot,
    T::Id: PartialEq,
{
    let before = items.len();
    items.retain(|existing| existing.id() != *id);
    items.len() != before
}
