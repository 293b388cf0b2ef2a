//! Canned answers for well-known questions
//!
//! A canned answer short-circuits everything else: no classification, no
//! provider call. Matching is case-folded substring containment, and the
//! table is scanned in declaration order so the first listed phrase wins.

/// A known question phrase and its pre-written answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedAnswer {
    pub phrase: &'static str,
    pub answer: &'static str,
}

const WHAT_IS_SEO: &str = r#"# What is SEO?

**Search Engine Optimization (SEO)** is the practice of improving a website so it ranks higher in unpaid ("organic") search results on Google, Bing and other search engines.

## Why It Matters
- 93% of online experiences begin with search engines
- 75% of users never scroll past the first page of results
- Organic search drives over 50% of all website traffic

## The Three Pillars
1. **On-Page SEO**: titles, meta descriptions, headings, keyword usage and content quality
2. **Technical SEO**: site speed, mobile-friendliness, crawlability and structured data
3. **Off-Page SEO**: backlinks, brand mentions and local citations

## Getting Started
1. Research the keywords your customers actually search for
2. Write helpful content that answers their questions
3. Make every page fast and mobile friendly
4. Earn links from reputable sites in your industry
5. Track rankings and traffic, then keep improving"#;

const HOW_TO_MAKE_COFFEE: &str = r#"# How to Make Great Coffee

## What You Need
- Freshly roasted whole beans (use within 2-4 weeks of roasting)
- A burr grinder
- Filtered water heated to 195-205°F (90-96°C)
- Your brewer of choice: pour-over, French press or drip

## The Golden Ratio
Use **1 gram of coffee for every 15-17 grams of water**. For one mug, that is roughly 20 g of coffee to 320 g of water.

## Step by Step
1. **Grind just before brewing**: medium-fine for pour-over, coarse for French press
2. **Bloom the grounds**: pour twice the coffee's weight in water and wait 30 seconds
3. **Brew slowly**: finish pouring within 2-3 minutes for pour-over, steep 4 minutes for French press
4. **Serve immediately**: coffee tastes best within 20 minutes of brewing

## Common Mistakes
- Pre-ground coffee that has gone stale
- Boiling water that scorches the grounds
- Guessing quantities instead of weighing them"#;

const WHAT_IS_A_META_DESCRIPTION: &str = r#"# What is a Meta Description?

A **meta description** is the short summary (about 150-160 characters) that appears below your page title in search results. It is set in the page's HTML:

`<meta name="description" content="Your summary here">`

## Why It Matters
- It is your ad copy in the search results
- A compelling description can raise click-through rates by 5.8%
- Google bolds the searched keywords inside it

## How to Write One
1. Keep it between 150 and 160 characters
2. Include the page's primary keyword naturally
3. Describe the specific value of the page
4. End with a clear call-to-action
5. Write a unique description for every page"#;

const HOW_TO_START_A_BUSINESS: &str = r#"# How to Start a Business

## 1. Validate the Idea
- Talk to at least 20 potential customers before spending money
- Check who already solves the problem and how you will be different

## 2. Plan the Basics
- Define your target customer, pricing and sales channels
- Estimate startup costs and 12 months of operating expenses

## 3. Make It Official
- Choose a business structure and register your name
- Open a separate business bank account
- Get the licenses and permits your industry requires

## 4. Get Found Online
- Claim your Google Business Profile
- Launch a simple, mobile-friendly website with clear contact details
- 46% of all Google searches have local intent, so optimize for local search

## 5. Launch and Learn
- Start small, collect feedback and track what brings customers in
- Reinvest in the channels that work"#;

/// Lookup table, scanned in order.
const CANNED_ANSWERS: &[CannedAnswer] = &[
    CannedAnswer {
        phrase: "what is seo",
        answer: WHAT_IS_SEO,
    },
    CannedAnswer {
        phrase: "how to make coffee",
        answer: HOW_TO_MAKE_COFFEE,
    },
    CannedAnswer {
        phrase: "what is a meta description",
        answer: WHAT_IS_A_META_DESCRIPTION,
    },
    CannedAnswer {
        phrase: "how to start a business",
        answer: HOW_TO_START_A_BUSINESS,
    },
];

/// Finds the canned answer for a prompt, if any
#[derive(Debug, Clone, Copy)]
pub struct CannedAnswers {
    entries: &'static [CannedAnswer],
}

impl Default for CannedAnswers {
    fn default() -> Self {
        Self {
            entries: CANNED_ANSWERS,
        }
    }
}

impl CannedAnswers {
    /// Creates a lookup over a custom table
    pub fn with_entries(entries: &'static [CannedAnswer]) -> Self {
        Self { entries }
    }

    /// Returns the first entry whose phrase occurs in the prompt
    pub fn lookup(&self, prompt: &str) -> Option<&'static CannedAnswer> {
        let lowercase = prompt.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowercase.contains(entry.phrase))
    }
}
