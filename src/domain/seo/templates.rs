//! Template content generation
//!
//! `render` is a pure, total function from an intent plus extracted slots to
//! markdown text. It is the terminal fallback of the generation pipeline and
//! also serves the long-form local answers that pre-empt remote calls.

use super::extract::{extract_business_type, extract_topic, title_case};
use super::intent::{IntentSet, IntentTag};

/// Render the template for `intent`, filling topic and business-type slots.
pub fn render(intent: IntentTag, topic: &str, business_type: &str) -> String {
    match intent {
        IntentTag::CoffeeBusiness => coffee(),
        IntentTag::RestaurantBusiness => restaurant(),
        IntentTag::MetaDescriptionRequest => meta_description(business_type),
        IntentTag::BlogRequest => blog_post(topic),
        IntentTag::KeywordResearchRequest => keyword_research(topic),
        IntentTag::BusinessStrategy => business_strategy(topic, business_type),
        IntentTag::FoodBusinessStrategy => food_business_strategy(business_type),
        IntentTag::GenericSeo => seo_guide(topic),
        IntentTag::GeneralQuestion => generic(topic),
    }
}

/// Render the template chosen by the intent set's primary tag.
pub fn render_for_prompt(intents: &IntentSet, prompt: &str) -> (IntentTag, String) {
    let intent = intents.primary();
    let content = render(intent, &extract_topic(prompt), extract_business_type(prompt));
    (intent, content)
}

/// Long-form local answer for tag combinations answered without a provider.
///
/// Only three combinations qualify: a food business question with no
/// deliverable or SEO tag, a pure business strategy question, and a pure
/// SEO question. Everything else goes to the providers.
pub fn local_answer(intents: &IntentSet, prompt: &str) -> Option<(IntentTag, String)> {
    let intent = if intents.contains(IntentTag::FoodBusinessStrategy)
        && !intents.has_request()
        && !intents.contains(IntentTag::GenericSeo)
    {
        IntentTag::FoodBusinessStrategy
    } else if intents.is_only(IntentTag::BusinessStrategy) {
        IntentTag::BusinessStrategy
    } else if intents.is_only(IntentTag::GenericSeo) {
        IntentTag::GenericSeo
    } else {
        return None;
    };

    let content = render(intent, &extract_topic(prompt), extract_business_type(prompt));
    Some((intent, content))
}

fn coffee() -> String {
    r#"**Perfect Meta Description for Coffee Shop:**

"☕ Morning Brew Cafe - Experience artisanal coffee in a cozy atmosphere. Freshly roasted beans, friendly service, and the perfect brew await you. Visit us today!"

**Why This Works for a Coffee Shop:**
• Includes emoji (☕) for visual appeal
• Highlights unique selling points (artisanal, freshly roasted)
• Clear call-to-action ("Visit us today")
• Perfect length for SEO (under 160 characters)
• Uses sensory words (cozy atmosphere, perfect brew)"#
        .to_string()
}

fn restaurant() -> String {
    r#"**Compelling Meta Description for Restaurant:**

"🍽️ [Restaurant Name] - Exceptional dining experience with chef-crafted dishes, warm ambiance, and impeccable service. Make your reservation today!"

**Key Elements:**
• Food emoji (🍽️) grabs attention
• Emphasizes quality (chef-crafted, impeccable service)
• Creates desire (exceptional dining experience)
• Strong call-to-action (reservation)"#
        .to_string()
}

fn meta_description(business_type: &str) -> String {
    format!(
        r#"**Professional Meta Description for {title}:**

"Discover exceptional quality and outstanding service at [Business Name]. Our {business_type} offers customized solutions to meet your unique needs. Contact us today!"

**SEO Optimized Features:**
• Includes primary keyword "{business_type}"
• Clear value proposition
• Call-to-action drives conversions
• Professional tone builds trust
• Ideal length for search results"#,
        title = title_case(business_type),
    )
}

fn blog_post(topic: &str) -> String {
    format!(
        r#"**SEO-Optimized Blog Post: "{title}"**

**Engaging Title:** "The Complete Guide to {title}: Tips, Trends, and Strategies"

**Compelling Introduction:**
In today's competitive landscape, understanding {topic} is more important than ever. This comprehensive guide covers everything you need to know to succeed.

**Key Sections:**
1. Current Market Trends and Insights
2. Proven Strategies for Success
3. Common Mistakes to Avoid
4. Future Outlook and Opportunities

**Target Keywords:**
- {topic} services
- best {topic} strategies
- {topic} for beginners
- professional {topic} solutions"#,
        title = title_case(topic),
    )
}

fn keyword_research(topic: &str) -> String {
    format!(
        r#"**Keyword Research for "{title}"**

**Primary Keywords:**
- {topic}
- {topic} near me
- best {topic}

**Long-Tail Keywords:**
- affordable {topic} services
- how to choose a {topic}
- {topic} reviews and recommendations
- top rated {topic} in my area

**Question Keywords:**
- what makes a good {topic}?
- how much does {topic} cost?

**Strategy Tips:**
• Long-tail keywords make up 70% of all search traffic
• Target one primary keyword per page
• Add "near me" variations: 46% of searches have local intent
• Track rankings monthly and refresh underperforming pages"#,
        title = title_case(topic),
    )
}

fn business_strategy(topic: &str, business_type: &str) -> String {
    format!(
        r#"# Growth Strategy for Your {title}

## 1. Know Your Customers
- Interview your best customers about why they chose you
- Build 2-3 simple customer profiles and tailor your messaging to them

## 2. Strengthen Your Online Presence
- 93% of online experiences begin with search engines, so make sure you can be found
- Claim and complete your Google Business Profile
- Publish helpful content about {topic} that answers real customer questions

## 3. Turn Customers Into Advocates
- Ask every happy customer for a review
- Launch a referral offer: referred customers have a 37% higher retention rate

## 4. Measure What Matters
- Track leads, conversion rate and customer lifetime value monthly
- Double down on the channels that bring profitable customers"#,
        title = title_case(business_type),
    )
}

fn food_business_strategy(business_type: &str) -> String {
    format!(
        r#"# Food Business Growth Plan for Your {title}

## 1. Win Local Search
- 46% of all Google searches have local intent
- Keep your Google Business Profile hours, menu and photos up to date
- Respond to every review within 48 hours

## 2. Make the Menu Work Harder
- Highlight 3-5 signature items on your website and social media
- Use descriptive, sensory language ("slow-roasted", "freshly baked")

## 3. Build Repeat Visits
- Start a simple loyalty program: returning customers spend 67% more
- Collect emails and announce seasonal specials and events

## 4. Partner Locally
- Cater for nearby offices and events
- Cross-promote with neighboring businesses

Running a great {business_type} is about consistent quality plus being easy to find."#,
        title = title_case(business_type),
    )
}

fn seo_guide(topic: &str) -> String {
    format!(
        r#"# SEO Action Plan for {title}

## Why SEO Matters
- 93% of online experiences begin with search engines
- 75% of users never scroll past the first page of results

## Quick Wins
1. Write a unique title tag (50-60 characters) for every page
2. Add compelling meta descriptions (150-160 characters)
3. Use one clear H1 heading per page that includes your main keyword
4. Compress images and add descriptive alt text

## Content Strategy
- Publish in-depth content about {topic} that answers real questions
- Link related pages together to build topical authority
- Refresh older content every 6-12 months

## Technical Checklist
- Mobile-friendly design
- Page load time under 3 seconds
- HTTPS enabled
- XML sitemap submitted to Google Search Console"#,
        title = title_case(topic),
    )
}

fn generic(topic: &str) -> String {
    format!(
        r#"**AuraSEO AI Professional Content for "{title}":**

**Optimized Meta Description:**
"Transform your {topic} with our expert solutions. Get measurable results, professional guidance, and sustainable growth. Start your journey today!"

**Content Strategy:**
✅ **Primary Focus:** {topic} optimization and results
✅ **Target Audience:** Businesses seeking {topic} improvement
✅ **Key Messaging:** Professional expertise + measurable outcomes
✅ **Call-to-Action:** Begin with consultation/assessment

**Recommended Approach:**
1. Comprehensive {topic} audit and analysis
2. Customized strategy development
3. Implementation with ongoing support
4. Performance monitoring and optimization"#,
        title = title_case(topic),
    )
}
