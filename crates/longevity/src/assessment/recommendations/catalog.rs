use super::{Recommendation, RecommendationCategory};

pub(crate) const HEPATOBURN: Recommendation = Recommendation {
    category: RecommendationCategory::Supplement,
    title: "HepatoBurn - Energy & Metabolism Support",
    description: "Scientists have discovered a hidden root cause of stubborn belly fat and low energy. This powerful formula is designed for those struggling with low energy and stubborn belly fat. Experience more energy, healthier skin, better sleep, reduced hunger, clearer thinking, and improved overall health.",
    link: Some("https://1ae599voosvr3u55ljqrsz1d2y.hop.clickbank.net"),
    link_text: Some("Learn More About HepatoBurn"),
};

pub(crate) const QUIETUM_PLUS: Recommendation = Recommendation {
    category: RecommendationCategory::Supplement,
    title: "Quietum Plus - Ear Health Support",
    description: "Ear ringing and whooshing happen when neural pathways get damaged. The solution is to feed, regenerate and rebuild these pathways so they work in perfect harmony with your brain. Quietum Plus combines powerful plants with modern medicine and technology, backed by hundreds of clinical studies.",
    link: Some("https://hop.clickbank.net/?affiliate=fitatn&vendor=quietum&tid=track"),
    link_text: Some("Discover Quietum Plus"),
};

pub(crate) const PROSTAVIVE: Recommendation = Recommendation {
    category: RecommendationCategory::Supplement,
    title: "ProstaVive - Comprehensive Health Support",
    description: "A powerful new formula for boosting overall health and vitality. These specific, unique nutrients support metabolic activity, maintain healthy blood flow, and help support optimal health. Perfect for addressing multiple health concerns simultaneously.",
    link: Some("https://hop.clickbank.net/?affiliate=fitatn&vendor=provive&tid=track"),
    link_text: Some("Explore ProstaVive"),
};

pub(crate) const PRIMEBIOME: Recommendation = Recommendation {
    category: RecommendationCategory::Supplement,
    title: "PrimeBiome - Doctor-Endorsed Skin-Gut Gummies",
    description: "PrimeBiome combines unique ingredients designed to support the cell turnover process by maintaining a healthy skin and gut microbiome. The new beneficial bacteria help promote a more youthful appearance while supporting digestive health.",
    link: Some("https://51a483kplq0keu0m6g-cc5xkrr.hop.clickbank.net"),
    link_text: Some("Try PrimeBiome"),
};

pub(crate) const MEDITERRANEAN_GUIDE: Recommendation = Recommendation {
    category: RecommendationCategory::Diet,
    title: "The Mediterranean Diet Guide",
    description: "Transform your health with the scientifically-proven Mediterranean diet. This comprehensive guide includes meal plans, shopping lists for unusual ingredients (they're actually all just at the grocery store!), and step-by-step recipes. Perfect for sustainable weight loss and longevity.",
    link: Some("https://05a9d6qkbr1l5q48m6jmndvr9e.hop.clickbank.net"),
    link_text: Some("Get The Mediterranean Diet Guide"),
};

pub(crate) const KETO_PROTOCOL: Recommendation = Recommendation {
    category: RecommendationCategory::Diet,
    title: "Advanced Ketogenic Protocol",
    description: "Take your low-carb lifestyle to the next level with our advanced ketogenic protocol. Designed for those ready to optimize their metabolism, boost energy levels, and achieve peak mental clarity through nutritional ketosis.",
    link: Some("#"),
    link_text: Some("Learn About Keto Optimization"),
};

pub(crate) const PALEO_TRANSFORMATION: Recommendation = Recommendation {
    category: RecommendationCategory::Diet,
    title: "Paleo Lifestyle Transformation",
    description: "Discover the power of ancestral eating with our comprehensive Paleo guide. Perfect for improving energy, reducing inflammation, and optimizing your health through whole foods nutrition.",
    link: Some("#"),
    link_text: Some("Explore Paleo Living"),
};

pub(crate) const SLEEP_OPTIMIZATION: Recommendation = Recommendation {
    category: RecommendationCategory::Lifestyle,
    title: "Optimize Your Sleep for Longevity",
    description: "Quality sleep is the foundation of longevity. Focus on maintaining consistent sleep schedules, creating a cool, dark environment, and establishing a relaxing bedtime routine to maximize recovery and cellular repair.",
    link: None,
    link_text: None,
};

pub(crate) const STRESS_MASTERY: Recommendation = Recommendation {
    category: RecommendationCategory::Lifestyle,
    title: "Stress Management Mastery",
    description: "Chronic stress accelerates aging at the cellular level. Implement daily meditation, deep breathing exercises, or yoga to activate your parasympathetic nervous system and promote longevity.",
    link: None,
    link_text: None,
};

/// Every entry the generator can emit, in catalog order.
pub fn catalog() -> [Recommendation; 9] {
    [
        HEPATOBURN,
        QUIETUM_PLUS,
        PROSTAVIVE,
        PRIMEBIOME,
        MEDITERRANEAN_GUIDE,
        KETO_PROTOCOL,
        PALEO_TRANSFORMATION,
        SLEEP_OPTIMIZATION,
        STRESS_MASTERY,
    ]
}
