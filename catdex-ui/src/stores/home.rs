//! Home page breed selection

use crate::display_types::BreedSummary;

/// Pick the breed the home page starts on.
///
/// A requested id wins when it names a listed breed; anything else falls
/// back to the first breed in the list.
pub fn initial_breed<'a>(
    breeds: &'a [BreedSummary],
    requested: Option<&str>,
) -> Option<&'a BreedSummary> {
    requested
        .and_then(|id| breeds.iter().find(|b| b.id == id))
        .or_else(|| breeds.first())
}

/// Breed to switch to when the query changes, if it differs from `current`
pub fn selection_for_query(
    breeds: &[BreedSummary],
    current: Option<&str>,
    requested: Option<&str>,
) -> Option<String> {
    let wanted = initial_breed(breeds, requested)?;
    (current != Some(wanted.id.as_str())).then(|| wanted.id.clone())
}
