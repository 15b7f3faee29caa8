//! Plain-text rendering of predictions

use super::analysis::MatchupReport;
use super::matchup::PredictionResult;
use super::performance::PerformancePrediction;
use crate::Factor;

/// Format a prediction for display
pub fn format_prediction(pred: &PredictionResult) -> String {
    format!(
        r#"
┌─────────────────────────────────────────────────┐
│  {} @ {}
├─────────────────────────────────────────────────┤
│  Predicted winner: {}
│  Confidence:       {}
│  Win probability:  {} {:.2}% - {} {:.2}%
│  Predicted score:  {} {} - {} {}
│  Point spread:     {:.1}
└─────────────────────────────────────────────────┘
"#,
        pred.away_team,
        pred.home_team,
        pred.favored_team,
        pred.confidence,
        pred.home_team,
        pred.home_win_probability,
        pred.away_team,
        pred.away_win_probability,
        pred.home_team,
        pred.predicted_home_score,
        pred.away_team,
        pred.predicted_away_score,
        pred.point_spread
    )
}

/// Format a player outlook for display
pub fn format_performance(pred: &PerformancePrediction) -> String {
    let (low, high) = pred.expected_points_range;
    format!(
        r#"
┌─────────────────────────────────────────────────┐
│  {}
├─────────────────────────────────────────────────┤
│  Outlook:          {}
│  Confidence:       {}
│  Score:            {:.2}
│  Expected points:  {:.0}-{:.0}
│  Consistency:      {:.0}%
└─────────────────────────────────────────────────┘
"#,
        pred.player_name,
        pred.outlook,
        pred.confidence,
        pred.performance_score,
        low,
        high,
        pred.consistency_rating
    )
}

/// Prediction plus factor breakdown, availability and insights
pub fn format_report(report: &MatchupReport) -> String {
    let mut out = format_prediction(&report.prediction);

    out.push_str("\nKey factors\n");
    out.push_str("───────────────────────────────\n");
    for factor in Factor::TEAM {
        let home = report.home_breakdown.get(factor);
        let away = report.away_breakdown.get(factor);
        if let (Some(h), Some(a)) = (home, away) {
            let marker = if h.neutral && a.neutral { " (no data)" } else { "" };
            out.push_str(&format!(
                "  {:<20} {:>6.1} vs {:>6.1}  x{:.2}{}\n",
                factor.name(),
                h.sub_score,
                a.sub_score,
                h.weight,
                marker
            ));
        }
    }

    if !report.key_players.is_empty() {
        out.push_str("\nKey players\n");
        out.push_str("───────────────────────────────\n");
        for player in &report.key_players {
            let (low, high) = player.expected_points_range;
            out.push_str(&format!(
                "  {}: {} ({:.0}-{:.0} pts, consistency {:.0}%, {} confidence)\n",
                player.player_name,
                player.outlook,
                low,
                high,
                player.consistency_rating,
                player.confidence
            ));
        }
    }

    if !report.availability.is_empty() {
        out.push_str("\nPlayer availability\n");
        out.push_str("───────────────────────────────\n");
        for (label, statuses) in [
            (&report.prediction.home_team, &report.availability.home),
            (&report.prediction.away_team, &report.availability.away),
        ] {
            for status in statuses {
                let state = if status.is_playing { "PLAYING" } else { "OUT" };
                out.push_str(&format!(
                    "  {}: {} {} ({})\n",
                    label, status.player_name, state, status.impact
                ));
            }
        }
        out.push_str(&format!(
            "  Strength adjustment: {:+}% / {:+}%\n",
            report.adjustment.home, report.adjustment.away
        ));
    }

    if !report.insights.is_empty() {
        out.push_str("\nInsights\n");
        out.push_str("───────────────────────────────\n");
        for insight in &report.insights {
            out.push_str(&format!("  {}\n", insight));
        }
    }

    out
}
