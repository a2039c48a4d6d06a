//! Console reports for the four analyses.
//!
//! Each report runs its query against the graph, writes the human readable
//! result and hands the query result back to the caller.

use crate::config::AnalysisConfig;
use crate::errors::RouteError;
use crate::graph::WeightedGraph;
use crate::graph_algos::{is_connected, nodes_below_threshold, shortest_route, simple_paths, Route};
use crate::instrument::{measure, Measurement};

use std::fmt::{Debug, Display};
use std::io::Write;
use num_traits::Zero;


const ROUTE_SEPARATOR: &str = " -> ";


pub fn report_shortest_route<W, C>(out: &mut W, graph: &WeightedGraph<C>, from: &str, to: &str) -> Result<Route<C>, RouteError>
where
    W: Write,
    C: Zero + Ord + Copy + Debug + Display,
{
    let route = shortest_route(graph, from, to)?;

    writeln!(out, "Shortest route from {from} to {to}: {}", route.path.join(ROUTE_SEPARATOR))?;
    writeln!(out, "Total distance: {} km", route.distance)?;

    Ok(route)
}

pub fn report_threshold<W, C>(out: &mut W, graph: &WeightedGraph<C>, threshold: C) -> Result<Vec<String>, RouteError>
where
    W: Write,
    C: Copy + PartialOrd + Debug + Display,
{
    let nodes = nodes_below_threshold(graph, threshold);

    writeln!(out, "Towns with every road under {threshold} km:")?;
    for node in &nodes {
        writeln!(out, "{node}")?;
    }

    Ok(nodes)
}

pub fn report_connectivity<W, C>(out: &mut W, graph: &WeightedGraph<C>) -> Result<bool, RouteError>
where
    W: Write,
    C: Copy + PartialEq + Debug,
{
    let connected = is_connected(graph)?;

    if connected {
        writeln!(out, "The graph is connected.")?;
    } else {
        writeln!(out, "The graph is NOT connected.")?;
    }

    Ok(connected)
}

pub fn report_simple_paths<W, C>(out: &mut W, graph: &WeightedGraph<C>, from: &str, to: &str) -> Result<Vec<Vec<String>>, RouteError>
where
    W: Write,
    C: Copy + PartialEq + Debug,
{
    let paths = simple_paths(graph, from, to)?;

    writeln!(out, "Cycle-free routes from {from} to {to}:")?;
    for path in &paths {
        writeln!(out, "{}", path.join(ROUTE_SEPARATOR))?;
    }
    if paths.is_empty() {
        writeln!(out, "No cycle-free routes between {from} and {to}.")?;
    }

    Ok(paths)
}


/// Run every report once, in the order threshold, shortest route, connectivity, paths
pub fn run_reports<W: Write>(out: &mut W, graph: &WeightedGraph<u32>, config: &AnalysisConfig) -> Result<(), RouteError> {
    report_threshold(out, graph, config.threshold)?;
    report_shortest_route(out, graph, &config.from, &config.to)?;
    report_connectivity(out, graph)?;
    report_simple_paths(out, graph, &config.from, &config.to)?;
    Ok(())
}

/// Run every report once more under measurement and print the figures
/// Stops at the first failing report
pub fn run_timed_reports<W: Write>(out: &mut W, graph: &WeightedGraph<u32>, config: &AnalysisConfig) -> Result<Vec<Measurement<()>>, RouteError> {
    let mut measurements = Vec::with_capacity(4);

    let m = measure("threshold filter", || report_threshold(out, graph, config.threshold));
    measurements.push(settle(m)?);

    let m = measure("shortest route", || report_shortest_route(out, graph, &config.from, &config.to));
    measurements.push(settle(m)?);

    let m = measure("connectivity check", || report_connectivity(out, graph));
    measurements.push(settle(m)?);

    let m = measure("cycle-free routes", || report_simple_paths(out, graph, &config.from, &config.to));
    measurements.push(settle(m)?);

    writeln!(out)?;
    for m in &measurements {
        write_measurement(out, m)?;
    }

    Ok(measurements)
}

pub fn write_measurement<W: Write, T>(out: &mut W, m: &Measurement<T>) -> Result<(), RouteError> {
    writeln!(
        out,
        "{}: {:.6} s, {} allocations, {} bytes allocated, {} bytes retained",
        m.label,
        m.elapsed.as_secs_f64(),
        m.allocations,
        m.allocated_bytes,
        m.retained_bytes,
    )?;
    Ok(())
}


/// Unwrap the measured result, keeping the figures
fn settle<T>(m: Measurement<Result<T, RouteError>>) -> Result<Measurement<()>, RouteError> {
    let Measurement { label, value, elapsed, allocations, allocated_bytes, retained_bytes } = m;
    value?;
    Ok(Measurement { label, value: (), elapsed, allocations, allocated_bytes, retained_bytes })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::towns;

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), RouteError>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_shortest_route_report() {
        let graph = towns();
        let text = output(|out| report_shortest_route(out, &graph, "Madrid", "Getafe").map(|_| ()));

        assert_eq!(text, "Shortest route from Madrid to Getafe: Madrid -> Getafe\nTotal distance: 16 km\n");
    }

    #[test]
    fn test_threshold_report() {
        let graph = towns();
        let text = output(|out| report_threshold(out, &graph, 15).map(|_| ()));

        assert_eq!(
            text,
            "Towns with every road under 15 km:\nAlcorcón\nVillanueva de la Cañada\nMóstoles\nFuenlabrada\n"
        );
    }

    #[test]
    fn test_connectivity_report() {
        let mut graph = towns();
        assert_eq!(output(|out| report_connectivity(out, &graph).map(|_| ())), "The graph is connected.\n");

        graph.isolate("Getafe").unwrap();
        assert_eq!(output(|out| report_connectivity(out, &graph).map(|_| ())), "The graph is NOT connected.\n");
    }

    #[test]
    fn test_simple_paths_report() {
        let mut graph = towns();
        let text = output(|out| report_simple_paths(out, &graph, "Madrid", "Getafe").map(|_| ()));

        assert_eq!(
            text,
            "Cycle-free routes from Madrid to Getafe:\n\
             Madrid -> Alcorcón -> Móstoles -> Fuenlabrada -> Getafe\n\
             Madrid -> Getafe\n"
        );

        graph.isolate("Getafe").unwrap();
        let text = output(|out| report_simple_paths(out, &graph, "Madrid", "Getafe").map(|_| ()));
        assert!(text.ends_with("No cycle-free routes between Madrid and Getafe.\n"));
    }

    #[test]
    fn test_run_reports_order() {
        let graph = towns();
        let text = output(|out| run_reports(out, &graph, &AnalysisConfig::default()));

        let threshold = text.find("Towns with every road").unwrap();
        let route = text.find("Shortest route").unwrap();
        let connected = text.find("The graph is connected").unwrap();
        let paths = text.find("Cycle-free routes").unwrap();
        assert!(threshold < route && route < connected && connected < paths);
    }

    #[test]
    fn test_unreachable_route_fails_fast() {
        let mut graph = towns();
        graph.isolate("Getafe").unwrap();

        let mut buf = Vec::new();
        let result = run_reports(&mut buf, &graph, &AnalysisConfig::default());
        assert!(matches!(result, Err(RouteError::NoPathFound)));

        // the threshold report ran before the failure, nothing after it
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Towns with every road"));
        assert!(!text.contains("The graph is"));
    }

    #[test]
    fn test_timed_reports() {
        let graph = towns();
        let mut buf = Vec::new();
        let measurements = run_timed_reports(&mut buf, &graph, &AnalysisConfig::default()).unwrap();

        let labels: Vec<_> = measurements.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["threshold filter", "shortest route", "connectivity check", "cycle-free routes"]);

        // every analysis builds owned strings, so each one allocates
        for m in &measurements {
            assert!(m.allocations > 0, "{} made no allocations", m.label);
            assert!(m.allocated_bytes > 0, "{} allocated no bytes", m.label);
        }

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("shortest route: "));
        assert!(text.contains("bytes retained"));
    }
}
