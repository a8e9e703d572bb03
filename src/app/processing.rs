//! Runs each subcommand against the library components and packages the
//! outcome as a serializable report.
//!
//! Every report renders as plain text through `Display` and as JSON through
//! `Serialize`; the orchestrator picks one.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println};
use crate::dict::{path_get, path_lookup, NestedValue, PathDictionary};
use crate::graph::WeightedGraph;
use crate::numeric;
use crate::scanner::StringScanner;
use crate::tree::BinarySearchTree;

//─────────────────────────────────────────────────────────────────────────────
// Graph
//─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub vertex_count: usize,
    pub depth_first: Option<Vec<String>>,
    pub shortest_path: Option<PathReport>,
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub vertices: Vec<String>,
    /// `None` when no path exists.
    pub cost: Option<f64>,
}

/// Parses `U:V` or `U:V:WEIGHT`.
pub fn parse_edge(raw: &str) -> Result<(String, String, f64), AppError> {
    let invalid = || AppError::InvalidEdge(raw.to_string());
    let parts: Vec<&str> = raw.split(':').collect();
    let (u, v, weight) = match parts.as_slice() {
        [u, v] => (*u, *v, 1.0),
        [u, v, w] => (*u, *v, w.trim().parse::<f64>().map_err(|_| invalid())?),
        _ => return Err(invalid()),
    };
    if u.is_empty() || v.is_empty() || !weight.is_finite() {
        return Err(invalid());
    }
    Ok((u.to_string(), v.to_string(), weight))
}

pub fn run_graph(
    edges: &[String],
    route: Option<(&str, &str)>,
    dfs_start: Option<&str>,
    quiet_mode: bool,
) -> Result<GraphReport, AppError> {
    verbose_println!(quiet_mode, "[GRAPH] Building graph from {} edge(s)...", edges.len());
    let mut graph = WeightedGraph::new();
    for raw in edges {
        let (u, v, weight) = parse_edge(raw)?;
        if weight < 0.0 {
            verbose_eprintln!(
                quiet_mode,
                "[WARNING] Negative weight on edge {}; shortest paths may be wrong.",
                raw
            );
        }
        graph.add_edge(u, v, weight);
    }
    verbose_println!(quiet_mode, "   => {} vertices.", graph.vertex_count());

    let depth_first = dfs_start.map(|start| {
        verbose_println!(quiet_mode, "[GRAPH] Depth-first traversal from {}", start);
        graph.depth_first(&start.to_string())
    });

    let shortest_path = route.map(|(from, to)| {
        verbose_println!(quiet_mode, "[GRAPH] Shortest path {} -> {}", from, to);
        let found = graph.shortest_path_with_cost(&from.to_string(), &to.to_string());
        if found.is_none() {
            verbose_println!(quiet_mode, "   => No path.");
        }
        PathReport {
            from: from.to_string(),
            to: to.to_string(),
            cost: found.as_ref().map(|f| f.cost),
            vertices: found.map(|f| f.path).unwrap_or_default(),
        }
    });

    Ok(GraphReport {
        vertex_count: graph.vertex_count(),
        depth_first,
        shortest_path,
    })
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: {}", self.vertex_count)?;
        if let Some(order) = &self.depth_first {
            writeln!(f, "Depth-first: [{}]", order.join(", "))?;
        }
        if let Some(path) = &self.shortest_path {
            match path.cost {
                Some(cost) => writeln!(
                    f,
                    "Shortest path {} -> {}: [{}] (cost {})",
                    path.from,
                    path.to,
                    path.vertices.join(", "),
                    cost
                )?,
                None => writeln!(f, "Shortest path {} -> {}: none", path.from, path.to)?,
            }
        }
        Ok(())
    }
}

//─────────────────────────────────────────────────────────────────────────────
// Tree
//─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TreeReport {
    pub inorder: Vec<i64>,
    pub height: usize,
    pub search: Option<SearchReport>,
}

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub value: i64,
    pub found: bool,
}

pub fn run_tree(values: &[i64], find: Option<i64>, quiet_mode: bool) -> TreeReport {
    verbose_println!(quiet_mode, "[TREE] Inserting {} value(s)...", values.len());
    let tree: BinarySearchTree<i64> = values.iter().copied().collect();
    let search = find.map(|value| SearchReport {
        value,
        found: tree.contains(&value),
    });
    TreeReport {
        inorder: tree.inorder_traversal(),
        height: tree.height(),
        search,
    }
}

impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree inorder: {:?}", self.inorder)?;
        writeln!(f, "Height: {}", self.height)?;
        if let Some(search) = &self.search {
            let status = if search.found { "found" } else { "not found" };
            writeln!(f, "Search {}: {}", search.value, status)?;
        }
        Ok(())
    }
}

//─────────────────────────────────────────────────────────────────────────────
// Scanner
//─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub matches: Vec<MatchReport>,
    pub cursor: usize,
    pub preview: String,
}

#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub pattern: String,
    pub matched: Option<String>,
}

pub fn run_scan(text: &str, patterns: &[String], quiet_mode: bool) -> Result<ScanReport, AppError> {
    let mut scanner = StringScanner::new(text);
    let mut matches = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let matched = scanner.find(pattern)?.map(str::to_string);
        verbose_println!(
            quiet_mode,
            "[SCAN] {} -> {:?} (cursor {})",
            pattern,
            matched,
            scanner.cursor()
        );
        matches.push(MatchReport {
            pattern: pattern.clone(),
            matched,
        });
    }
    Ok(ScanReport {
        matches,
        cursor: scanner.cursor(),
        preview: scanner.preview().to_string(),
    })
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.matches {
            match &m.matched {
                Some(text) => writeln!(f, "{}: {}", m.pattern, text)?,
                None => writeln!(f, "{}: no match", m.pattern)?,
            }
        }
        writeln!(f, "Cursor: {} (preview {:?})", self.cursor, self.preview)
    }
}

//─────────────────────────────────────────────────────────────────────────────
// Lookup
//─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub key: String,
    pub resolved: bool,
    pub value: Value,
}

pub fn run_lookup(
    file: &Path,
    key: &str,
    default: Option<&str>,
    quiet_mode: bool,
) -> Result<LookupReport, AppError> {
    file_handler::validate_input_file(file, quiet_mode)?;
    let document = NestedValue::from(file_handler::read_document(file, quiet_mode)?);
    let default = match default {
        Some(raw) => NestedValue::from(serde_json::from_str::<Value>(raw)?),
        None => NestedValue::Scalar(Value::Null),
    };

    let resolved = path_lookup(&document, key).is_some();
    verbose_println!(quiet_mode, "[LOOKUP] {} resolved: {}", key, resolved);
    let value = Value::from(path_get(&document, key, &default).clone());
    Ok(LookupReport {
        key: key.to_string(),
        resolved,
        value,
    })
}

impl fmt::Display for LookupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.value)
    }
}

//─────────────────────────────────────────────────────────────────────────────
// Demo
//─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub dictionary_len: usize,
    pub dictionary_count: usize,
    pub shortest_path: Vec<u32>,
    pub tree_inorder: Vec<i64>,
    pub found: Option<String>,
    pub hash: u32,
    pub seventeen_is_prime: bool,
    pub edit_distance: usize,
    pub deep_get: Value,
    pub loaded: Option<Value>,
}

/// Sample document used by the demo.
pub fn sample_document() -> Value {
    json!({"a": {"b": {"c": 42}}, "x": 100})
}

pub fn run_demo(write_path: Option<&Path>, quiet_mode: bool) -> Result<DemoReport, AppError> {
    verbose_println!(quiet_mode, "[DEMO] Running sample inputs...");

    let mut dictionary = PathDictionary::new("test");
    dictionary.add("k1", "v1");
    dictionary.add("k2", "v2");

    let mut graph = WeightedGraph::new();
    for v in 0..5u32 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1, 2.0);
    graph.add_edge(1, 2, 3.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(3, 4, 4.0);

    let mut tree = BinarySearchTree::with_root(10i64);
    tree.extend([5, 15, 3, 7, 12, 18]);

    let mut scanner = StringScanner::new("hello world 123");
    let found = scanner.find(r"\d+")?.map(str::to_string);

    let raw_document = sample_document();
    let document = NestedValue::from(raw_document.clone());
    let deep_get = path_lookup(&document, "a.b.c")
        .cloned()
        .map(Value::from)
        .unwrap_or(Value::Null);

    let loaded = match write_path {
        Some(path) => {
            verbose_println!(quiet_mode, "[DEMO] Writing sample document to {}", path.display());
            file_handler::write_document(path, &raw_document)?;
            Some(file_handler::read_document(path, quiet_mode)?)
        }
        None => None,
    };

    Ok(DemoReport {
        dictionary_len: dictionary.len(),
        dictionary_count: dictionary.count(),
        shortest_path: graph.shortest_path(&0, &4),
        tree_inorder: tree.inorder_traversal(),
        found,
        hash: numeric::string_hash("hello world"),
        seventeen_is_prime: numeric::is_prime(17),
        edit_distance: numeric::edit_distance("kitten", "sitting"),
        deep_get,
        loaded,
    })
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "D len: {} (writes: {})", self.dictionary_len, self.dictionary_count)?;
        writeln!(f, "SP 0->4: {:?}", self.shortest_path)?;
        writeln!(f, "Tree inorder: {:?}", self.tree_inorder)?;
        writeln!(f, "Found: {}", self.found.as_deref().unwrap_or("None"))?;
        writeln!(f, "Hash of 'hello world': {}", self.hash)?;
        writeln!(f, "Is 17 prime: {}", self.seventeen_is_prime)?;
        writeln!(f, "Edit distance: {}", self.edit_distance)?;
        writeln!(f, "Deep get: {}", self.deep_get)?;
        if let Some(loaded) = &self.loaded {
            writeln!(f, "Loaded: {}", loaded)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("a:b").unwrap(), ("a".into(), "b".into(), 1.0));
        assert_eq!(parse_edge("0:1:2.5").unwrap(), ("0".into(), "1".into(), 2.5));
        for bad in ["a", "a:b:c:d", ":b", "a:b:heavy", "a:b:inf"] {
            assert!(matches!(parse_edge(bad), Err(AppError::InvalidEdge(_))), "{}", bad);
        }
    }

    #[test]
    fn test_run_graph() {
        let edges: Vec<String> = ["0:1:2", "1:2:3", "2:3:1", "3:4:4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = run_graph(&edges, Some(("0", "4")), Some("2"), true).unwrap();
        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.depth_first.unwrap(), vec!["2", "1", "0", "3", "4"]);
        let path = report.shortest_path.unwrap();
        assert_eq!(path.vertices, vec!["0", "1", "2", "3", "4"]);
        assert_eq!(path.cost, Some(10.0));
    }

    #[test]
    fn test_run_graph_without_route() {
        let edges = vec!["a:b".to_string(), "c:d".to_string()];
        let report = run_graph(&edges, Some(("a", "d")), None, true).unwrap();
        let path = report.shortest_path.as_ref().unwrap();
        assert!(path.vertices.is_empty());
        assert_eq!(path.cost, None);
        assert!(report.to_string().contains("a -> d: none"));
    }

    #[test]
    fn test_run_tree() {
        let report = run_tree(&[10, 5, 15, 3, 7, 12, 18], Some(99), true);
        assert_eq!(report.inorder, vec![3, 5, 7, 10, 12, 15, 18]);
        assert_eq!(report.height, 3);
        assert!(!report.search.unwrap().found);
    }

    #[test]
    fn test_run_scan() {
        let patterns = vec![r"\w+".to_string(), r"\d+".to_string(), "zzz".to_string()];
        let report = run_scan("hello world 123", &patterns, true).unwrap();
        let matched: Vec<Option<&str>> =
            report.matches.iter().map(|m| m.matched.as_deref()).collect();
        assert_eq!(matched, vec![Some("hello"), Some("123"), None]);
        assert_eq!(report.cursor, 15);
    }

    #[test]
    fn test_run_scan_bad_pattern() {
        let patterns = vec!["[".to_string()];
        assert!(matches!(run_scan("x", &patterns, true), Err(AppError::Scan(_))));
    }

    #[test]
    fn test_run_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        file_handler::write_document(&path, &sample_document()).unwrap();

        let hit = run_lookup(&path, "a.b.c", None, true).unwrap();
        assert!(hit.resolved);
        assert_eq!(hit.value, json!(42));

        let miss = run_lookup(&path, "a.x.c", Some("-1"), true).unwrap();
        assert!(!miss.resolved);
        assert_eq!(miss.value, json!(-1));

        let nested = run_lookup(&path, "a", None, true).unwrap();
        assert_eq!(nested.value, json!({"b": {"c": 42}}));
    }

    #[test]
    fn test_run_lookup_bad_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        file_handler::write_document(&path, &sample_document()).unwrap();
        assert!(matches!(
            run_lookup(&path, "a", Some("{not json"), true),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn test_run_demo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.json");
        let report = run_demo(Some(&path), true).unwrap();
        assert_eq!(report.dictionary_len, 2);
        assert_eq!(report.shortest_path, vec![0, 1, 2, 3, 4]);
        assert_eq!(report.tree_inorder, vec![3, 5, 7, 10, 12, 15, 18]);
        assert_eq!(report.found.as_deref(), Some("123"));
        assert!(report.seventeen_is_prime);
        assert_eq!(report.edit_distance, 3);
        assert_eq!(report.deep_get, json!(42));
        assert_eq!(report.loaded, Some(sample_document()));
        assert!(report.to_string().contains("Tree inorder: [3, 5, 7, 10, 12, 15, 18]"));
    }
}
