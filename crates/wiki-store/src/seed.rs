//! Documents written into a fresh store at startup.

use crate::error::StoreResult;
use crate::traits::RevisionStore;

/// `(title, content)` pairs written by [`seed_default_documents`], in order.
pub const DEFAULT_DOCUMENTS: &[(&str, &str)] = &[
    (
        "maize",
        "Maize also known as corn, is a cereal grain first domesticated by indigenous peoples \
         in southern Mexico about 10,000 years ago. The leafy stalk of the plant produces \
         pollen inflorescences and separate ovuliferous inflorescences called ears that yield \
         kernels or seeds, which are fruits.",
    ),
    (
        "rice",
        "Rice is the seed of the grass species Oryza sativa (Asian rice) or Oryza glaberrima \
         (African rice). As a cereal grain, it is the most widely consumed staple food for a large \
         part of the world's human population, especially in Asia. It is the agricultural commodity \
         with the third-highest worldwide production (rice, 741.5 million tonnes in 2014), after \
         sugarcane (1.9 billion tonnes) and maize (1.0 billion tonnes)",
    ),
];

/// Write every entry of [`DEFAULT_DOCUMENTS`] as a revision.
///
/// Returns the number of documents written.
pub fn seed_default_documents(store: &dyn RevisionStore) -> StoreResult<usize> {
    for (title, content) in DEFAULT_DOCUMENTS {
        store.add_revision(title, content)?;
    }
    tracing::info!(count = DEFAULT_DOCUMENTS.len(), "seeded default documents");
    Ok(DEFAULT_DOCUMENTS.len())
}
