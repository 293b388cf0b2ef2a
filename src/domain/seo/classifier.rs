//! Keyword-based intent classification
//!
//! Classification is plain case-folded substring matching against fixed
//! keyword lists. Every rule that matches contributes its tag; the
//! classifier imposes no precedence between tags.

use super::intent::{IntentSet, IntentTag};

/// Classifies a prompt into a set of intent tags
pub trait IntentClassifier: Send + Sync {
    /// Classify a prompt. Never fails; unmatched input yields an empty set.
    fn classify(&self, prompt: &str) -> IntentSet;
}

const COFFEE_KEYWORDS: &[&str] = &["coffee", "cafe", "espresso"];

const RESTAURANT_KEYWORDS: &[&str] = &["restaurant", "dining", "bistro"];

const META_DESCRIPTION_KEYWORDS: &[&str] = &["meta description", "meta tag", "meta"];

const BLOG_KEYWORDS: &[&str] = &["blog", "article", "post"];

const KEYWORD_RESEARCH_KEYWORDS: &[&str] = &["keyword"];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business", "strategy", "grow", "marketing", "customer", "revenue", "profit", "sales",
];

const FOOD_KEYWORDS: &[&str] = &[
    "food", "restaurant", "cafe", "coffee", "bakery", "menu", "catering", "dining",
];

const SEO_KEYWORDS: &[&str] = &[
    "seo",
    "meta",
    "description",
    "keyword",
    "blog",
    "content",
    "website",
    "google",
    "rank",
    "search",
    "optimiz",
    "traffic",
];

/// Ordered (tag, keywords) rules evaluated against the case-folded prompt.
const RULES: &[(IntentTag, &[&str])] = &[
    (IntentTag::CoffeeBusiness, COFFEE_KEYWORDS),
    (IntentTag::RestaurantBusiness, RESTAURANT_KEYWORDS),
    (IntentTag::MetaDescriptionRequest, META_DESCRIPTION_KEYWORDS),
    (IntentTag::BlogRequest, BLOG_KEYWORDS),
    (IntentTag::KeywordResearchRequest, KEYWORD_RESEARCH_KEYWORDS),
    (IntentTag::BusinessStrategy, BUSINESS_KEYWORDS),
    (IntentTag::GenericSeo, SEO_KEYWORDS),
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Default rule-based classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, prompt: &str) -> IntentSet {
        let lowercase = prompt.to_lowercase();
        if lowercase.trim().is_empty() {
            return IntentSet::new();
        }

        let mut intents: IntentSet = RULES
            .iter()
            .filter(|(_, keywords)| contains_any(&lowercase, keywords))
            .map(|(tag, _)| *tag)
            .collect();

        // Food business questions are business questions about a food topic
        if intents.contains(IntentTag::BusinessStrategy) && contains_any(&lowercase, FOOD_KEYWORDS)
        {
            intents.insert(IntentTag::FoodBusinessStrategy);
        }

        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classify(prompt: &str) -> IntentSet {
        KeywordClassifier.classify(prompt)
    }

    #[test]
    fn test_empty_and_whitespace_yield_empty_set() {
        assert!(classify("").is_empty());
        assert!(classify("   \t\n").is_empty());
    }

    #[test]
    fn test_unmatched_prompt_yields_empty_set() {
        assert!(classify("tell me a joke about penguins").is_empty());
    }

    #[test]
    fn test_meta_description_for_coffee_shop() {
        let intents = classify("Write a meta description for a cozy coffee shop");

        assert!(intents.contains(IntentTag::MetaDescriptionRequest));
        assert!(intents.contains(IntentTag::CoffeeBusiness));
        assert!(intents.contains(IntentTag::GenericSeo));
        assert!(!intents.contains(IntentTag::BusinessStrategy));
        assert_eq!(intents.primary(), IntentTag::MetaDescriptionRequest);
    }

    #[test]
    fn test_keyword_research() {
        let intents = classify("generate seo keywords for bakery");

        assert!(intents.contains(IntentTag::KeywordResearchRequest));
        assert!(intents.contains(IntentTag::GenericSeo));
        assert_eq!(intents.primary(), IntentTag::KeywordResearchRequest);
    }

    #[test]
    fn test_blog_request() {
        let intents = classify("Draft an ARTICLE about hiking boots");

        assert!(intents.contains(IntentTag::BlogRequest));
        assert_eq!(intents.primary(), IntentTag::BlogRequest);
    }

    #[test]
    fn test_food_business_strategy_requires_both() {
        let intents = classify("How can I grow my bakery?");
        assert!(intents.contains(IntentTag::BusinessStrategy));
        assert!(intents.contains(IntentTag::FoodBusinessStrategy));

        let intents = classify("How can I grow my plumbing company?");
        assert!(intents.contains(IntentTag::BusinessStrategy));
        assert!(!intents.contains(IntentTag::FoodBusinessStrategy));

        let intents = classify("best bakery in town");
        assert!(!intents.contains(IntentTag::FoodBusinessStrategy));
    }

    #[test]
    fn test_pure_seo() {
        let intents = classify("How do I get more traffic to my website?");
        assert!(intents.is_only(IntentTag::GenericSeo));
    }

    #[test]
    fn test_substring_matching_catches_word_forms() {
        assert!(classify("optimizing my pages").contains(IntentTag::GenericSeo));
        assert!(classify("our customers love us").contains(IntentTag::BusinessStrategy));
    }

    proptest! {
        #[test]
        fn classification_is_order_independent(
            (words, shuffled) in proptest::collection::vec(
                prop::sample::select(vec![
                    "coffee", "blog", "meta", "grow", "bakery", "website",
                    "penguin", "keyword", "dining", "hello", "strategy",
                ]),
                0..8,
            )
            .prop_flat_map(|words| (Just(words.clone()), Just(words).prop_shuffle()))
        ) {
            prop_assert_eq!(classify(&words.join(" ")), classify(&shuffled.join(" ")));
        }
    }
}
