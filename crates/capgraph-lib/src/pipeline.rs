//! The end-to-end graph pipeline
//!
//! Strictly sequential: resolve the site, build the window, pick a link,
//! fetch capacity samples, then render the egress and ingress charts.
//! Failures are terminal; there is no retry and no partial-success mode.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::chart::{self, ChartConfig};
use crate::chooser::LinkChooser;
use crate::client::{ApiClient, MetricsRequest};
use crate::error::{Error, Result};
use crate::models::{Direction, Link, Site};
use crate::output::{format_mbps, print_info, print_warning};
use crate::resolve;
use crate::series::PartitionedSeries;
use crate::window::TimeWindow;

/// Floor of the chart's y-axis in Mbps; keeps the egress and ingress charts
/// on a comparable scale even when one direction is much smaller.
const CHART_FLOOR_MBPS: f64 = 10.0;

/// Inputs owned by the CLI layer.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub site_query: String,
    pub period_hours: u32,
    pub days_ago: u32,
    pub graph_height: usize,
}

/// Selection state threaded through the stages instead of ambient globals.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub tenant: Option<String>,
    pub site: Site,
    pub link: Link,
    pub window: TimeWindow,
}

#[derive(Tabled)]
struct LinkRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Circuit")]
    network: String,
    #[tabled(rename = "Path ID")]
    path_id: String,
}

/// Run the whole pipeline against an authenticated client.
pub async fn run(client: &ApiClient, options: &RunOptions, chooser: &dyn LinkChooser) -> Result<()> {
    let inventory = client.sites().await?;
    if let Some(tenant) = &inventory.name {
        println!("Tenant: {tenant}");
    }

    let matched = resolve::best_match(&options.site_query, &inventory.items)?;
    print_info(&format!(
        "Closest site match for {:?} (score {}/100):",
        options.site_query, matched.score
    ));
    println!("         Name: {}", matched.site.name);
    println!("      Site ID: {}", matched.site.id);
    println!(
        "  Description: {}",
        matched.site.description.as_deref().unwrap_or("-")
    );

    let window = TimeWindow::starting_days_ago(options.days_ago, options.period_hours);

    let topology = client.topology(&matched.site.id).await?;
    let mut links: Vec<Link> = topology
        .links
        .into_iter()
        .filter(Link::is_internet_stub)
        .collect();

    println!("\nInternet links at {}:", matched.site.name);
    if links.is_empty() {
        return Err(Error::NotFound(format!(
            "no internet links found at site {}",
            matched.site.name
        )));
    }
    let rows: Vec<LinkRow> = links
        .iter()
        .enumerate()
        .map(|(index, link)| LinkRow {
            index: index + 1,
            network: link.network.clone(),
            path_id: link.path_id.clone(),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    let selected = if links.len() == 1 {
        print_info("Only one internet link at this site, selecting it");
        0
    } else {
        chooser.choose(&links)?
    };
    if selected >= links.len() {
        return Err(Error::NotFound(format!(
            "chosen link {} is out of range",
            selected + 1
        )));
    }
    let context = RunContext {
        tenant: inventory.name,
        site: matched.site,
        link: links.swap_remove(selected),
        window,
    };

    print_info(&format!(
        "Showing capacity from {} to {}",
        context.window.start_iso(),
        context.window.end_iso()
    ));

    let request =
        MetricsRequest::path_capacity(&context.site.id, &context.link.path_id, &context.window);
    let response = client.metrics(&request).await?;
    let series = PartitionedSeries::from_response(&response);

    let config = ChartConfig {
        height: options.graph_height,
        minimum: CHART_FLOOR_MBPS,
    };
    render_direction(Direction::Egress, &series, &config, options, &context);
    render_direction(Direction::Ingress, &series, &config, options, &context);
    Ok(())
}

/// Print one direction's heading, chart, and zero baseline.
fn render_direction(
    direction: Direction,
    series: &PartitionedSeries,
    config: &ChartConfig,
    options: &RunOptions,
    context: &RunContext,
) {
    let values = series.values(direction);
    println!();
    println!(
        "{} bandwidth capacity at {} on {} ({} hour period starting {} days back)",
        direction.as_str().to_uppercase(),
        context.site.name,
        context.link.network,
        options.period_hours,
        options.days_ago,
    );
    if values.is_empty() {
        print_warning(&format!(
            "no usable {} samples in this window",
            direction.as_str()
        ));
    } else {
        let peak = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        println!("Samples: {}   Peak: {}", values.len(), format_mbps(peak));
    }
    println!("{}", chart::render(&[values.to_vec()], config));
    println!("{}", chart::render_baseline(values.len()));
}
