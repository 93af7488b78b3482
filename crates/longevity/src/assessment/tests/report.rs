use super::common::*;
use crate::assessment::domain::Answers;
use crate::assessment::recommendations::{recommend, RecommendationConfig};
use crate::assessment::report::{email_subject, render_email_html, ResultsView};
use crate::assessment::scoring::ScoreLevel;

#[test]
fn subject_carries_the_score() {
    assert_eq!(
        email_subject(72),
        "Your Longevity Score: 72/100 - Personalized Health Recommendations"
    );
}

#[test]
fn email_lists_top_picks_then_full_plan() {
    let recommendations = recommend(&worst_answers());
    let html = render_email_html("Ada", 8, &recommendations);

    assert!(html.contains("Hello Ada!"));
    assert!(html.contains("Needs Improvement - 8/100"));
    assert!(html.contains("background: #dc2626"));
    assert!(html.contains("#1 Pick: HepatoBurn - Energy &amp; Metabolism Support"));
    assert!(html.contains("#3 Pick: ProstaVive"));
    assert!(!html.contains("#4 Pick"));

    let plan = html
        .split_once("Complete Optimization Plan")
        .map(|(_, rest)| rest)
        .expect("plan section");
    for recommendation in &recommendations {
        assert!(plan.contains(&recommendation.title.replace('&', "&amp;")));
    }
}

#[test]
fn email_escapes_respondent_name() {
    let html = render_email_html("<script>alert('x')</script>", 50, &[]);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("Fair - 50/100"));
}

#[test]
fn affiliate_links_are_escaped_in_attributes() {
    let answers = Answers::new().with(
        crate::assessment::questionnaire::ids::HEALTH_SYMPTOMS,
        vec!["Ear ringing (tinnitus)"],
    );
    let html = render_email_html("Ada", 60, &recommend(&answers));

    assert!(html.contains(
        "href=\"https://hop.clickbank.net/?affiliate=fitatn&amp;vendor=quietum&amp;tid=track\""
    ));
}

#[test]
fn results_view_for_ideal_respondent() {
    let view = ResultsView::build("Ada", &ideal_answers(), &RecommendationConfig::default());

    assert_eq!(view.longevity_score, 100);
    assert_eq!(view.level, ScoreLevel::Excellent);
    assert_eq!(view.level_label, "Excellent");
    assert_eq!(view.level_color, "#059669");
    assert_eq!(
        view.strengths,
        vec![
            "Excellent sleep quality",
            "Regular exercise routine",
            "Active stress management",
            "Optimal hydration levels",
        ]
    );
    assert!(view.opportunities.is_empty());
    assert_eq!(view.top_picks.len(), 1);
    assert_eq!(view.top_picks[0].label, "#1 Pick");
    assert_eq!(view.quick_starts.len(), 1);
    assert_eq!(
        view.quick_starts[0].label,
        "Start with Advanced Ketogenic Protocol"
    );
}

#[test]
fn results_view_for_struggling_respondent() {
    let view = ResultsView::build("Ada", &worst_answers(), &RecommendationConfig::default());

    assert_eq!(view.longevity_score, 8);
    assert!(view.strengths.is_empty());
    assert_eq!(
        view.opportunities,
        vec![
            "Sleep quality improvement needed",
            "Reduce processed food intake",
            "Increase physical activity",
            "Stress level management",
        ]
    );
    let ranks: Vec<usize> = view.top_picks.iter().map(|pick| pick.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
    let quick: Vec<&str> = view.quick_starts.iter().map(|q| q.label.as_str()).collect();
    assert_eq!(quick, vec!["Start with HepatoBurn", "Start with Quietum Plus"]);
}

#[test]
fn results_view_serializes_flattened_picks() {
    let view = ResultsView::build("Ada", &sample_answers(), &RecommendationConfig::default());
    let payload = serde_json::to_value(&view).expect("serializes");

    assert_eq!(payload["longevity_score"], 69);
    assert_eq!(payload["level"], "good");
    assert_eq!(payload["top_picks"][0]["rank"], 1);
    assert_eq!(
        payload["top_picks"][0]["title"],
        "HepatoBurn - Energy & Metabolism Support"
    );
    assert_eq!(payload["top_picks"][0]["category"], "supplement");
}
