use std::path::PathBuf;

use axum::{
    Router,
    extract::{
        Json, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

mod page;

use page::ChartSize;

use crate::chart::render_svg;
use crate::core::{
    ChartSeries, Projection, ProjectionSummary, SimulationParameters, YearlySnapshot, project,
};
use crate::error::AppError;
use crate::format::{CurrencyFormatter, Locale};
use crate::input::{NumericInputs, RawInputs};
use crate::presets;
use crate::report::{SummaryDisplay, TableRow, TextTable, write_rows};

const STYLES_CSS: &str = include_str!("../../web/styles.css");

const DEFAULT_CHART_WIDTH: f64 = 720.0;
const DEFAULT_CHART_HEIGHT: f64 = 320.0;
const DEFAULT_PRESET: &str = "starter";

#[derive(Parser, Debug)]
#[command(
    name = "compound",
    about = "Compound interest projection with yearly snapshots, summary table and chart"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a projection to the terminal
    Project(ProjectArgs),
    /// Serve the calculator over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long, default_value_t = 0.0, help = "Initial principal")]
    principal: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Contribution added at the end of every month"
    )]
    monthly: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Nominal annual interest rate in percent, e.g. 6"
    )]
    rate: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Horizon in years; partial final years are dropped"
    )]
    years: f64,
    #[arg(long, default_value_t = 12, help = "Compounding periods per year")]
    frequency: u32,
    #[arg(long, help = "Named preset; replaces the five numeric options")]
    preset: Option<String>,
    #[arg(long, default_value = "en-US", help = "Locale for currency formatting")]
    locale: Locale,
    #[arg(long, help = "Write the chart as SVG to this path")]
    svg: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: f64,
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    height: f64,
    #[arg(long, default_value_t = 1.0, help = "Device pixel ratio of the SVG")]
    dpr: f64,
    #[arg(long, help = "Print the projection as JSON")]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "COMPOUND_PORT", default_value_t = 8080)]
    port: u16,
    #[arg(
        long,
        help = "Fallback locale when a request carries no usable Accept-Language"
    )]
    locale: Option<Locale>,
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    chart_width: f64,
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    chart_height: f64,
}

#[derive(Copy, Clone, Debug)]
struct AppState {
    fallback_locale: Locale,
    chart: ChartSize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageQuery {
    #[serde(flatten)]
    inputs: RawInputs,
    preset: Option<String>,
    locale: Option<String>,
    width: Option<String>,
    height: Option<String>,
    dpr: Option<String>,
}

/// Query-string form of `/api/simulate`; fields stay text so that empty or
/// malformed values are coerced like the page form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SimulateQuery {
    #[serde(flatten)]
    inputs: RawInputs,
    preset: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    principal: Option<f64>,
    #[serde(alias = "monthly")]
    monthly_contribution: Option<f64>,
    #[serde(alias = "rate")]
    annual_rate_percent: Option<f64>,
    years: Option<f64>,
    #[serde(alias = "freq", alias = "frequency")]
    compounding_per_year: Option<f64>,
    preset: Option<String>,
    locale: Option<String>,
}

#[derive(Debug)]
struct ApiRequest {
    parameters: SimulationParameters,
    locale: Option<Locale>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    parameters: SimulationParameters,
    locale: Locale,
    snapshots: Vec<YearlySnapshot>,
    summary: Option<ProjectionSummary>,
    display: Option<SummaryDisplay>,
    series: ChartSeries,
    rows: Vec<TableRow>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Project(args) => run_project(&args),
        Command::Serve(args) => Ok(run_http_server(args).await?),
    }
}

fn run_project(args: &ProjectArgs) -> Result<(), AppError> {
    let parameters = match &args.preset {
        Some(name) => preset_parameters(name)?,
        None => NumericInputs {
            principal: Some(args.principal),
            monthly: Some(args.monthly),
            rate: Some(args.rate),
            years: Some(args.years),
            freq: Some(f64::from(args.frequency)),
        }
        .coerce()?,
    };
    let projection = project(parameters);
    let formatter = CurrencyFormatter::new(args.locale);

    if args.json {
        let response = build_simulate_response(&projection, &formatter);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_text_report(&projection, &formatter));
    }

    if let Some(path) = &args.svg {
        if projection.is_empty() {
            warn!(path = %path.display(), "no full year projected; chart not written");
        } else {
            let svg = render_svg(
                &projection.series(),
                &formatter,
                args.width,
                args.height,
                args.dpr,
            )?;
            std::fs::write(path, svg)?;
            info!(path = %path.display(), "chart written");
        }
    }
    Ok(())
}

fn render_text_report(projection: &Projection, formatter: &CurrencyFormatter) -> String {
    let Some(summary) = projection.summary() else {
        return "Horizon is shorter than one full year; no yearly snapshots to show.\n"
            .to_string();
    };
    let display = SummaryDisplay::new(&summary, formatter);
    let mut table = TextTable::default();
    write_rows(&mut table, &projection.snapshots, formatter);
    format!(
        "Final balance:        {}\nTotal contributions:  {}\nTotal interest:       {}\n\
         Principal + contrib.: {}\n\n{}",
        display.final_balance,
        display.total_contribution,
        display.total_interest,
        display.chart_principal_and_contribution,
        table.render()
    )
}

pub async fn run_http_server(args: ServeArgs) -> std::io::Result<()> {
    let state = AppState {
        fallback_locale: args.locale.unwrap_or_default(),
        chart: ChartSize {
            width: args.chart_width,
            height: args.chart_height,
            dpr: 1.0,
        },
    };
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/chart.svg", get(chart_svg_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(state);

    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "compound HTTP server listening");
    info!("local access: http://127.0.0.1:{}/", addr.port());
    axum::serve(listener, app).await
}

async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let locale = resolve_locale(query.locale.as_deref(), &headers, state.fallback_locale);
    let html = match page_inputs(&query) {
        Ok(inputs) => page::build(&inputs, locale, state.chart),
        Err(err) => {
            warn!(error = %err, "page request rejected");
            page::build_error(&query.inputs, locale, &err.to_string())
        }
    };
    with_cache_control(Html(html))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn chart_svg_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let locale = resolve_locale(query.locale.as_deref(), &headers, state.fallback_locale);
    let parameters = match page_inputs(&query).and_then(|i| i.coerce().map_err(AppError::from)) {
        Ok(parameters) => parameters,
        Err(err) => {
            warn!(error = %err, "chart request rejected");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };
    let projection = project(parameters);
    if projection.is_empty() {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "horizon is shorter than one full year; nothing to chart",
        );
    }

    let size = chart_size(&query, state.chart);
    let formatter = CurrencyFormatter::new(locale);
    match render_svg(
        &projection.series(),
        &formatter,
        size.width,
        size.height,
        size.dpr,
    ) {
        Ok(svg) => with_cache_control(([(header::CONTENT_TYPE, "image/svg+xml")], svg)),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SimulateQuery>, QueryRejection>,
) -> Response {
    let request = query
        .map_err(|rejection| rejection.body_text())
        .and_then(|Query(query)| api_request_from_query(query).map_err(|e| e.to_string()));
    simulate_handler_impl(state, &headers, request)
}

async fn simulate_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SimulatePayload>, JsonRejection>,
) -> Response {
    let request = payload
        .map_err(|rejection| rejection.body_text())
        .and_then(|Json(payload)| api_request_from_payload(payload).map_err(|e| e.to_string()));
    simulate_handler_impl(state, &headers, request)
}

fn simulate_handler_impl(
    state: AppState,
    headers: &HeaderMap,
    request: Result<ApiRequest, String>,
) -> Response {
    let request = match request {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "simulate request rejected");
            return error_response(StatusCode::BAD_REQUEST, &err);
        }
    };
    let locale = request
        .locale
        .unwrap_or_else(|| resolve_locale(None, headers, state.fallback_locale));
    let projection = project(request.parameters);
    debug!(
        parameters = ?projection.parameters,
        snapshots = projection.snapshots.len(),
        %locale,
        "simulate request served"
    );
    json_response(
        StatusCode::OK,
        build_simulate_response(&projection, &CurrencyFormatter::new(locale)),
    )
}

/// Inputs for the page and chart routes: a named preset wins, an entirely
/// empty query loads the default preset, anything else is taken as typed.
fn page_inputs(query: &PageQuery) -> Result<RawInputs, AppError> {
    if let Some(name) = query.preset.as_deref().filter(|n| !n.trim().is_empty()) {
        return presets::find(name)
            .map(|p| p.inputs())
            .ok_or_else(|| AppError::UnknownPreset(name.to_string()));
    }
    if query.inputs.is_empty() {
        return Ok(presets::find(DEFAULT_PRESET)
            .map(|p| p.inputs())
            .unwrap_or_default());
    }
    Ok(query.inputs.clone())
}

fn chart_size(query: &PageQuery, fallback: ChartSize) -> ChartSize {
    let parse = |value: &Option<String>, default: f64, min: f64, max: f64| {
        value
            .as_deref()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map_or(default, |v| v.clamp(min, max))
    };
    ChartSize {
        width: parse(&query.width, fallback.width, 160.0, 4096.0),
        height: parse(&query.height, fallback.height, 120.0, 4096.0),
        dpr: parse(&query.dpr, fallback.dpr, 1.0, 4.0),
    }
}

fn resolve_locale(requested: Option<&str>, headers: &HeaderMap, fallback: Locale) -> Locale {
    if let Some(locale) = requested.and_then(|tag| tag.parse().ok()) {
        return locale;
    }
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or(fallback)
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload).map_err(|e| e.to_string())
}

fn api_request_from_query(query: SimulateQuery) -> Result<ApiRequest, AppError> {
    let locale = requested_locale(query.locale.as_deref())?;
    let parameters = match query.preset.as_deref() {
        Some(name) => preset_parameters(name)?,
        None => query.inputs.coerce()?,
    };
    Ok(ApiRequest { parameters, locale })
}

fn api_request_from_payload(payload: SimulatePayload) -> Result<ApiRequest, AppError> {
    let locale = requested_locale(payload.locale.as_deref())?;
    let parameters = match payload.preset.as_deref() {
        Some(name) => preset_parameters(name)?,
        None => NumericInputs {
            principal: payload.principal,
            monthly: payload.monthly_contribution,
            rate: payload.annual_rate_percent,
            years: payload.years,
            freq: payload.compounding_per_year,
        }
        .coerce()?,
    };

    Ok(ApiRequest { parameters, locale })
}

fn requested_locale(tag: Option<&str>) -> Result<Option<Locale>, AppError> {
    tag.map(str::parse::<Locale>)
        .transpose()
        .map_err(AppError::Locale)
}

fn preset_parameters(name: &str) -> Result<SimulationParameters, AppError> {
    let preset = presets::find(name).ok_or_else(|| AppError::UnknownPreset(name.to_string()))?;
    Ok(preset.inputs().coerce()?)
}

fn build_simulate_response(
    projection: &Projection,
    formatter: &CurrencyFormatter,
) -> SimulateResponse {
    let summary = projection.summary();
    let mut rows = Vec::with_capacity(projection.snapshots.len());
    write_rows(&mut rows, &projection.snapshots, formatter);
    SimulateResponse {
        parameters: projection.parameters,
        locale: formatter.locale(),
        snapshots: projection.snapshots.clone(),
        summary,
        display: summary.map(|s| SummaryDisplay::new(&s, formatter)),
        series: projection.series(),
        rows,
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn fallback_chart() -> ChartSize {
        ChartSize {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            dpr: 1.0,
        }
    }

    #[test]
    fn api_request_from_json_parses_camel_case_keys() {
        let json = r#"{
          "principal": 1000,
          "monthlyContribution": 100,
          "annualRatePercent": 6,
          "years": 10,
          "compoundingPerYear": 4,
          "locale": "de-DE"
        }"#;
        let request = api_request_from_json(json).expect("json should parse");
        let p = request.parameters;
        assert_approx(p.principal, 1000.0);
        assert_approx(p.monthly_contribution, 100.0);
        assert_approx(p.annual_rate_percent, 6.0);
        assert_approx(p.years, 10.0);
        assert_eq!(p.compounding_per_year, 4);
        assert_eq!(request.locale, Some(Locale::DeDe));
    }

    #[test]
    fn api_request_from_json_accepts_form_field_aliases() {
        let json = r#"{ "monthly": 50, "rate": 3.5, "freq": 365 }"#;
        let request = api_request_from_json(json).expect("json should parse");
        assert_approx(request.parameters.monthly_contribution, 50.0);
        assert_approx(request.parameters.annual_rate_percent, 3.5);
        assert_eq!(request.parameters.compounding_per_year, 365);
        assert_approx(request.parameters.years, 1.0);
        assert_eq!(request.locale, None);
    }

    #[test]
    fn api_request_from_json_applies_named_preset() {
        let request =
            api_request_from_json(r#"{ "preset": "retirement" }"#).expect("preset resolves");
        assert_approx(request.parameters.principal, 10_000.0);
        assert_approx(request.parameters.monthly_contribution, 500.0);
        assert_approx(request.parameters.years, 30.0);
    }

    #[test]
    fn api_request_from_json_rejects_bad_values() {
        let err = api_request_from_json(r#"{ "compoundingPerYear": -2 }"#)
            .expect_err("negative frequency");
        assert!(err.contains("compounding_per_year"));

        let err = api_request_from_json(r#"{ "locale": "tlh" }"#).expect_err("bad locale");
        assert!(err.contains("unsupported locale"));

        let err = api_request_from_json(r#"{ "preset": "moon" }"#).expect_err("bad preset");
        assert!(err.contains("unknown preset"));
    }

    fn request_from_uri(uri: &str) -> Result<ApiRequest, String> {
        let uri: axum::http::Uri = uri.parse().expect("valid uri");
        let Query(query) =
            Query::<SimulateQuery>::try_from_uri(&uri).map_err(|e| e.body_text())?;
        api_request_from_query(query).map_err(|e| e.to_string())
    }

    #[test]
    fn query_request_coerces_empty_and_malformed_fields() {
        let request =
            request_from_uri("/api/simulate?principal=&monthly=100&rate=5&years=5&freq=12")
                .expect("empty field is coerced");
        let p = request.parameters;
        assert_approx(p.principal, 0.0);
        assert_approx(p.monthly_contribution, 100.0);
        assert_approx(p.annual_rate_percent, 5.0);
        assert_approx(p.years, 5.0);
        assert_eq!(p.compounding_per_year, 12);

        let request = request_from_uri("/api/simulate?principal=abc&years=&freq=0")
            .expect("malformed fields are coerced");
        assert_approx(request.parameters.principal, 0.0);
        assert_approx(request.parameters.years, 1.0);
        assert_eq!(request.parameters.compounding_per_year, 12);
    }

    #[test]
    fn query_request_honours_preset_and_locale() {
        let request = request_from_uri("/api/simulate?preset=lump-sum&locale=ja-JP")
            .expect("preset resolves");
        assert_approx(request.parameters.principal, 50_000.0);
        assert_eq!(request.parameters.compounding_per_year, 4);
        assert_eq!(request.locale, Some(Locale::JaJp));

        let err = request_from_uri("/api/simulate?locale=tlh").expect_err("bad locale");
        assert!(err.contains("unsupported locale"));
    }

    #[test]
    fn rejected_simulate_request_is_json_with_no_store() {
        let state = AppState {
            fallback_locale: Locale::EnUs,
            chart: fallback_chart(),
        };
        let response = simulate_handler_impl(
            state,
            &HeaderMap::new(),
            Err("unknown preset `moon`".to_string()),
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn simulate_response_serialization_contains_expected_fields() {
        let projection = project(SimulationParameters::new(1000.0, 100.0, 6.0, 2.0).unwrap());
        let response = build_simulate_response(&projection, &CurrencyFormatter::default());
        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"snapshots\""));
        assert!(json.contains("\"cumulativeContribution\""));
        assert!(json.contains("\"interestEarned\""));
        assert!(json.contains("\"finalBalance\""));
        assert!(json.contains("\"principalContributed\""));
        assert!(json.contains("\"locale\":\"en-US\""));
        assert_eq!(response.rows.len(), 2);
    }

    #[test]
    fn simulate_response_for_short_horizon_has_no_summary() {
        let projection = project(SimulationParameters::new(1000.0, 100.0, 5.0, 0.5).unwrap());
        let response = build_simulate_response(&projection, &CurrencyFormatter::default());
        let json = serde_json::to_value(&response).expect("response should serialize");
        assert!(json["summary"].is_null());
        assert!(json["display"].is_null());
        assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn page_inputs_prefers_preset_then_defaults() {
        let query = PageQuery {
            preset: Some("daily".to_string()),
            inputs: RawInputs {
                principal: Some("1".to_string()),
                ..RawInputs::default()
            },
            ..PageQuery::default()
        };
        let inputs = page_inputs(&query).expect("preset exists");
        assert_eq!(inputs.freq.as_deref(), Some("365"));

        let defaults = page_inputs(&PageQuery::default()).expect("default preset");
        assert_eq!(defaults, presets::find(DEFAULT_PRESET).unwrap().inputs());

        let unknown = PageQuery {
            preset: Some("nope".to_string()),
            ..PageQuery::default()
        };
        assert!(matches!(
            page_inputs(&unknown),
            Err(AppError::UnknownPreset(_))
        ));
    }

    #[test]
    fn chart_size_clamps_and_falls_back() {
        let query = PageQuery {
            width: Some("99999".to_string()),
            height: Some("abc".to_string()),
            dpr: Some("0.25".to_string()),
            ..PageQuery::default()
        };
        let size = chart_size(&query, fallback_chart());
        assert_eq!(size.width, 4096.0);
        assert_eq!(size.height, DEFAULT_CHART_HEIGHT);
        assert_eq!(size.dpr, 1.0);
    }

    #[test]
    fn resolve_locale_prefers_query_then_header_then_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("fr-CH, fr;q=0.9, en;q=0.8"),
        );
        assert_eq!(
            resolve_locale(Some("en-GB"), &headers, Locale::EnUs),
            Locale::EnGb
        );
        assert_eq!(resolve_locale(Some("zz"), &headers, Locale::EnUs), Locale::FrFr);
        assert_eq!(
            resolve_locale(None, &HeaderMap::new(), Locale::JaJp),
            Locale::JaJp
        );
    }

    #[test]
    fn text_report_lists_summary_and_rows() {
        let projection = project(SimulationParameters::new(1000.0, 100.0, 0.0, 2.0).unwrap());
        let text = render_text_report(&projection, &CurrencyFormatter::default());
        assert!(text.starts_with("Final balance:        $3,400.00\n"));
        assert!(text.contains("Principal + contrib.: $3,400.00\n"));
        assert!(text.contains("Year"));
        assert_eq!(text.lines().count(), 4 + 1 + 3);
    }

    #[test]
    fn text_report_for_short_horizon_is_a_notice() {
        let projection = project(SimulationParameters::new(1000.0, 100.0, 5.0, 0.5).unwrap());
        let text = render_text_report(&projection, &CurrencyFormatter::default());
        assert!(text.starts_with("Horizon is shorter than one full year"));
    }

    #[test]
    fn cli_parses_project_and_serve_commands() {
        let cli = Cli::try_parse_from([
            "compound",
            "project",
            "--principal",
            "1000",
            "--monthly",
            "-25",
            "--rate",
            "6",
            "--years",
            "5",
            "--frequency",
            "4",
            "--locale",
            "de-DE",
        ])
        .expect("valid project args");
        let Command::Project(args) = cli.command else {
            panic!("expected project command");
        };
        assert_approx(args.monthly, -25.0);
        assert_eq!(args.frequency, 4);
        assert_eq!(args.locale, Locale::DeDe);

        let cli = Cli::try_parse_from(["compound", "serve", "--port", "9000"])
            .expect("valid serve args");
        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 9000);
        assert_eq!(args.host, "0.0.0.0");
    }
}
