use std::fmt::Write as _;

use crate::chart::render_svg;
use crate::core::project;
use crate::format::{CurrencyFormatter, Locale, SUPPORTED_LOCALES, escape_markup};
use crate::input::RawInputs;
use crate::presets::PRESETS;
use crate::report::{HtmlTableBody, SummaryDisplay, TABLE_HEADERS, write_rows};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct ChartSize {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Projected {
        summary: SummaryDisplay,
        chart_svg: String,
        table_body: String,
    },
    NoFullYear,
    Invalid(String),
}

pub(super) fn build(inputs: &RawInputs, locale: Locale, chart: ChartSize) -> String {
    render(inputs, locale, &project_outcome(inputs, locale, chart))
}

pub(super) fn build_error(inputs: &RawInputs, locale: Locale, message: &str) -> String {
    render(inputs, locale, &Outcome::Invalid(message.to_string()))
}

fn project_outcome(inputs: &RawInputs, locale: Locale, chart: ChartSize) -> Outcome {
    let params = match inputs.coerce() {
        Ok(params) => params,
        Err(err) => return Outcome::Invalid(err.to_string()),
    };
    let projection = project(params);
    let Some(summary) = projection.summary() else {
        return Outcome::NoFullYear;
    };

    let formatter = CurrencyFormatter::new(locale);
    let chart_svg = match render_svg(
        &projection.series(),
        &formatter,
        chart.width,
        chart.height,
        chart.dpr,
    ) {
        Ok(svg) => svg,
        Err(err) => return Outcome::Invalid(err.to_string()),
    };
    let mut body = HtmlTableBody::default();
    write_rows(&mut body, &projection.snapshots, &formatter);

    Outcome::Projected {
        summary: SummaryDisplay::new(&summary, &formatter),
        chart_svg,
        table_body: body.into_html(),
    }
}

fn render(inputs: &RawInputs, locale: Locale, outcome: &Outcome) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let _ = write!(
        html,
        "<!doctype html><html lang=\"{}\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>Compound interest calculator</title>\
         <link rel=\"stylesheet\" href=\"/styles.css\"></head><body><main>\
         <h1>Compound interest calculator</h1>",
        locale.tag()
    );

    render_form(&mut html, inputs, locale);
    render_presets(&mut html, locale);

    match outcome {
        Outcome::Projected {
            summary,
            chart_svg,
            table_body,
        } => {
            let _ = write!(
                html,
                "<section class=\"summary\">\
                 <div><span>Final balance</span><strong id=\"finalBalance\">{}</strong></div>\
                 <div><span>Total contributions</span><strong id=\"totalContribution\">{}</strong></div>\
                 <div><span>Total interest</span><strong id=\"totalInterest\">{}</strong></div>\
                 </section>",
                escape_markup(&summary.final_balance),
                escape_markup(&summary.total_contribution),
                escape_markup(&summary.total_interest)
            );
            let _ = write!(
                html,
                "<figure class=\"chart\">{chart_svg}<figcaption>\
                 Balance <b id=\"tBal\">{}</b> · Principal + contributions \
                 <b id=\"tContribution\">{}</b> · Interest <b id=\"tInt\">{}</b>\
                 </figcaption></figure>",
                escape_markup(&summary.chart_balance),
                escape_markup(&summary.chart_principal_and_contribution),
                escape_markup(&summary.chart_interest)
            );
            html.push_str("<table><thead><tr>");
            for header in TABLE_HEADERS {
                let _ = write!(html, "<th>{header}</th>");
            }
            let _ = write!(
                html,
                "</tr></thead><tbody id=\"tableBody\">{table_body}</tbody></table>"
            );
        }
        Outcome::NoFullYear => {
            html.push_str(
                "<p class=\"notice\">The horizon is shorter than one full year, \
                 so there are no yearly snapshots to show.</p>",
            );
        }
        Outcome::Invalid(message) => {
            let _ = write!(
                html,
                "<p class=\"notice error\">{}</p>",
                escape_markup(message)
            );
        }
    }

    html.push_str("</main></body></html>");
    html
}

fn render_form(html: &mut String, inputs: &RawInputs, locale: Locale) {
    let fields = [
        ("principal", "Initial principal", &inputs.principal),
        ("monthly", "Monthly contribution", &inputs.monthly),
        ("rate", "Annual rate (%)", &inputs.rate),
        ("years", "Years", &inputs.years),
        ("freq", "Compounding per year", &inputs.freq),
    ];

    html.push_str("<form method=\"get\" action=\"/\" class=\"inputs\">");
    for (name, label, value) in fields {
        let _ = write!(
            html,
            "<label>{label}<input id=\"{name}\" name=\"{name}\" inputmode=\"decimal\" value=\"{}\"></label>",
            escape_markup(value.as_deref().unwrap_or_default())
        );
    }
    html.push_str("<label>Locale<select name=\"locale\">");
    for option in SUPPORTED_LOCALES {
        let selected = if option == locale { " selected" } else { "" };
        let _ = write!(
            html,
            "<option value=\"{tag}\"{selected}>{tag}</option>",
            tag = option.tag()
        );
    }
    html.push_str("</select></label><button id=\"simulate\" type=\"submit\">Simulate</button></form>");
}

fn render_presets(html: &mut String, locale: Locale) {
    html.push_str("<nav class=\"presets\">");
    for preset in &PRESETS {
        let _ = write!(
            html,
            "<a href=\"/?{}&amp;locale={}\" data-preset=\"{}\">{}</a>",
            preset.query(),
            locale.tag(),
            escape_markup(preset.encoding),
            escape_markup(preset.label)
        );
    }
    html.push_str("</nav>");
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART: ChartSize = ChartSize {
        width: 640.0,
        height: 320.0,
        dpr: 1.0,
    };

    fn inputs(principal: &str, monthly: &str, rate: &str, years: &str, freq: &str) -> RawInputs {
        RawInputs {
            principal: Some(principal.to_string()),
            monthly: Some(monthly.to_string()),
            rate: Some(rate.to_string()),
            years: Some(years.to_string()),
            freq: Some(freq.to_string()),
        }
    }

    #[test]
    fn projected_page_contains_summary_chart_and_rows() {
        let html = build(&inputs("1000", "100", "0", "3", "12"), Locale::EnUs, CHART);
        assert!(html.contains("<strong id=\"finalBalance\">$4,600.00</strong>"));
        assert!(html.contains("<strong id=\"totalContribution\">$3,600.00</strong>"));
        assert!(html.contains("<strong id=\"totalInterest\">$0.00</strong>"));
        assert!(html.contains("<b id=\"tContribution\">$4,600.00</b>"));
        assert!(html.contains("<svg "));
        assert_eq!(html.matches("<td class=\"year\">").count(), 3);
    }

    #[test]
    fn sub_year_horizon_skips_summary_chart_and_table() {
        let html = build(&inputs("1000", "100", "5", "0.5", "12"), Locale::EnUs, CHART);
        assert!(html.contains("class=\"notice\""));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("finalBalance"));
        assert!(!html.contains("<tbody"));
    }

    #[test]
    fn invalid_input_shows_error_notice() {
        let html = build(&inputs("-1", "0", "0", "1", "12"), Locale::EnUs, CHART);
        assert!(html.contains("class=\"notice error\""));
        assert!(html.contains("invalid parameter `principal`: must be &gt;= 0"));
    }

    #[test]
    fn echoed_values_are_escaped() {
        let html = build(&inputs("\"><script>", "", "", "", ""), Locale::EnUs, CHART);
        assert!(!html.contains("<script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn locale_controls_formatting_and_selection() {
        let html = build(&inputs("1000", "0", "0", "1", "12"), Locale::DeDe, CHART);
        assert!(html.contains("<html lang=\"de-DE\">"));
        assert!(html.contains("1.000,00\u{a0}$"));
        assert!(html.contains("<option value=\"de-DE\" selected>"));
    }

    #[test]
    fn preset_links_carry_name_and_encoding() {
        let html = build_error(&RawInputs::default(), Locale::EnUs, "boom");
        assert!(html.contains("href=\"/?preset=retirement&amp;locale=en-US\""));
        assert!(html.contains("data-preset=\"p=10000, pm=500, r=7, y=30, n=12\""));
        assert!(html.contains("<p class=\"notice error\">boom</p>"));
    }
}
