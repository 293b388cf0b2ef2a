//! Intent value objects
//!
//! An `IntentTag` is a coarse topic/intent category derived from a prompt by
//! keyword matching. A prompt can carry several tags at once; `IntentSet`
//! holds them in a fixed canonical order so two sets with the same members
//! always compare and iterate identically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Coarse intent category of a prompt
///
/// Variant order is the canonical iteration order of an [`IntentSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTag {
    CoffeeBusiness,
    RestaurantBusiness,
    MetaDescriptionRequest,
    BlogRequest,
    KeywordResearchRequest,
    BusinessStrategy,
    FoodBusinessStrategy,
    GenericSeo,
    GeneralQuestion,
}

impl IntentTag {
    /// Wire name of the tag (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentTag::CoffeeBusiness => "coffee_business",
            IntentTag::RestaurantBusiness => "restaurant_business",
            IntentTag::MetaDescriptionRequest => "meta_description_request",
            IntentTag::BlogRequest => "blog_request",
            IntentTag::KeywordResearchRequest => "keyword_research_request",
            IntentTag::BusinessStrategy => "business_strategy",
            IntentTag::FoodBusinessStrategy => "food_business_strategy",
            IntentTag::GenericSeo => "generic_seo",
            IntentTag::GeneralQuestion => "general_question",
        }
    }

    /// True for tags that ask for a specific deliverable
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            IntentTag::MetaDescriptionRequest
                | IntentTag::BlogRequest
                | IntentTag::KeywordResearchRequest
        )
    }
}

impl fmt::Display for IntentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precedence used when a single tag has to be picked for rendering.
const RENDER_PRECEDENCE: [IntentTag; 8] = [
    IntentTag::MetaDescriptionRequest,
    IntentTag::BlogRequest,
    IntentTag::KeywordResearchRequest,
    IntentTag::CoffeeBusiness,
    IntentTag::RestaurantBusiness,
    IntentTag::FoodBusinessStrategy,
    IntentTag::BusinessStrategy,
    IntentTag::GenericSeo,
];

/// Set of intent tags produced by the classifier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSet(BTreeSet<IntentTag>);

impl IntentSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: IntentTag) {
        self.0.insert(tag);
    }

    pub fn contains(&self, tag: IntentTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set holds exactly one tag and it is `tag`
    pub fn is_only(&self, tag: IntentTag) -> bool {
        self.0.len() == 1 && self.contains(tag)
    }

    /// True when any request-type tag is present
    pub fn has_request(&self) -> bool {
        self.0.iter().any(IntentTag::is_request)
    }

    pub fn iter(&self) -> impl Iterator<Item = IntentTag> + '_ {
        self.0.iter().copied()
    }

    /// Single tag that decides which template is rendered.
    ///
    /// Request-type tags win over topic tags; an empty set resolves to
    /// `GeneralQuestion`.
    pub fn primary(&self) -> IntentTag {
        RENDER_PRECEDENCE
            .iter()
            .copied()
            .find(|tag| self.contains(*tag))
            .unwrap_or(IntentTag::GeneralQuestion)
    }
}

impl FromIterator<IntentTag> for IntentSet {
    fn from_iter<I: IntoIterator<Item = IntentTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_primary_is_general_question() {
        assert_eq!(IntentSet::new().primary(), IntentTag::GeneralQuestion);
    }

    #[test]
    fn test_request_tags_win_precedence() {
        let set: IntentSet = [
            IntentTag::CoffeeBusiness,
            IntentTag::GenericSeo,
            IntentTag::MetaDescriptionRequest,
        ]
        .into_iter()
        .collect();

        assert_eq!(set.primary(), IntentTag::MetaDescriptionRequest);
    }

    #[test]
    fn test_topic_tag_wins_over_generic_seo() {
        let set: IntentSet = [IntentTag::GenericSeo, IntentTag::RestaurantBusiness]
            .into_iter()
            .collect();

        assert_eq!(set.primary(), IntentTag::RestaurantBusiness);
    }

    #[test]
    fn test_is_only() {
        let set: IntentSet = [IntentTag::GenericSeo].into_iter().collect();
        assert!(set.is_only(IntentTag::GenericSeo));
        assert!(!set.is_only(IntentTag::BlogRequest));

        let set: IntentSet = [IntentTag::GenericSeo, IntentTag::BlogRequest]
            .into_iter()
            .collect();
        assert!(!set.is_only(IntentTag::GenericSeo));
        assert!(set.has_request());
    }

    #[test]
    fn test_tag_serializes_snake_case() {
        let json = serde_json::to_string(&IntentTag::KeywordResearchRequest).unwrap();
        assert_eq!(json, "\"keyword_research_request\"");
        assert_eq!(IntentTag::FoodBusinessStrategy.to_string(), "food_business_strategy");
    }
}
