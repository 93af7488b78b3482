use std::fmt::Write as _;

use super::super::recommendations::{top_picks, Recommendation, TOP_PICK_LIMIT};
use super::super::scoring::ScoreLevel;

const STYLES: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background-color: #f8fafc; }
        .container { max-width: 600px; margin: 0 auto; background-color: white; }
        .header { background: linear-gradient(135deg, #8b5cf6, #06b6d4); padding: 40px 20px; text-align: center; color: white; }
        .content { padding: 30px 20px; }
        .recommendation { border: 2px solid #e5e7eb; border-radius: 12px; padding: 20px; margin-bottom: 20px; }
        .rec-title { font-size: 18px; font-weight: bold; color: #1f2937; margin-bottom: 10px; }
        .rec-description { color: #6b7280; line-height: 1.6; margin-bottom: 15px; }
        .btn { background: linear-gradient(135deg, #8b5cf6, #06b6d4); color: white; padding: 12px 24px; border-radius: 8px; text-decoration: none; display: inline-block; font-weight: bold; }
        .footer { background-color: #f8fafc; padding: 20px; text-align: center; color: #6b7280; font-size: 14px; }"#;

pub fn email_subject(longevity_score: u8) -> String {
    format!("Your Longevity Score: {longevity_score}/100 - Personalized Health Recommendations")
}

/// Renders the HTML report mailed to the respondent. Styles are inlined so
/// mail clients without external CSS still display the score colors.
pub fn render_email_html(
    first_name: &str,
    longevity_score: u8,
    recommendations: &[Recommendation],
) -> String {
    let level = ScoreLevel::from_score(longevity_score);
    let color = level.color();
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Your Longevity Assessment Results</title>\n<style>");
    html.push_str(STYLES);
    writeln!(
        html,
        "\n        .score-circle {{ background: {color}; color: white; width: 120px; height: 120px; border-radius: 50%; display: flex; align-items: center; justify-content: center; margin: 0 auto 20px; font-size: 32px; font-weight: bold; }}"
    )
    .expect("write score styles");
    writeln!(
        html,
        "        .score-level {{ color: {color}; font-size: 18px; font-weight: bold; text-align: center; margin-bottom: 30px; }}"
    )
    .expect("write level styles");
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str("<div class=\"header\">\n<h1>Your Longevity Assessment Results</h1>\n");
    writeln!(
        html,
        "<p>Hello {}! Here's your comprehensive vitality assessment.</p>\n</div>",
        escape_html(first_name)
    )
    .expect("write greeting");

    html.push_str("<div class=\"content\">\n");
    writeln!(html, "<div class=\"score-circle\">{longevity_score}</div>").expect("write score");
    writeln!(
        html,
        "<div class=\"score-level\">{} - {longevity_score}/100</div>",
        level.label()
    )
    .expect("write score level");
    html.push_str(
        "<h2 style=\"color: #1f2937; margin-bottom: 20px;\">🎯 Top Recommendations For You</h2>\n",
    );

    for (index, pick) in top_picks(recommendations, TOP_PICK_LIMIT).iter().enumerate() {
        writeln!(
            html,
            "<div class=\"recommendation\">\n<div class=\"rec-title\">#{} Pick: {}</div>\n<div class=\"rec-description\">{}</div>\n<a href=\"{}\" class=\"btn\">{}</a>\n</div>",
            index + 1,
            escape_html(pick.title),
            escape_html(pick.description),
            escape_html(pick.link.unwrap_or_default()),
            escape_html(pick.link_text.unwrap_or_default()),
        )
        .expect("write top pick");
    }

    html.push_str("<h3 style=\"color: #1f2937; margin-top: 30px;\">Complete Optimization Plan</h3>\n");
    for recommendation in recommendations {
        write!(
            html,
            "<div style=\"margin-bottom: 15px;\">\n<strong>{}</strong><br>\n<span style=\"color: #6b7280;\">{}</span>",
            escape_html(recommendation.title),
            escape_html(recommendation.description),
        )
        .expect("write plan entry");
        if let Some(link) = recommendation.link {
            write!(
                html,
                "\n<br><a href=\"{}\" style=\"color: #8b5cf6;\">{}</a>",
                escape_html(link),
                escape_html(recommendation.link_text.unwrap_or_default()),
            )
            .expect("write plan link");
        }
        html.push_str("\n</div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"footer\">\n<p>Thank you for taking the Longevity Assessment!</p>\n");
    html.push_str("<p>This personalized report is based on your responses and designed to help optimize your health and vitality.</p>\n</div>\n");
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
