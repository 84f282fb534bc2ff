//! Dependency graph primitives over a plan's steps.
//!
//! All derived properties (cycles, critical path, depth groups) come from a
//! single depth-first traversal that uses an explicit stack instead of
//! recursion, so arbitrarily deep dependency chains cannot overflow the call
//! stack. Edges point from a step to the steps it depends on.
//!
//! Dangling dependency ids are kept out of the edge lists and reported
//! through [`DependencyGraph::missing_dependencies`]; every other computation
//! simply ignores them.

use std::collections::{BTreeMap, HashMap};

use crate::models::{PlanStep, StepId};

/// A dependency id that does not resolve to any step in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
    pub step_id: StepId,
    pub step_title: String,
    pub dependency: StepId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Result of one full traversal.
struct Traversal {
    /// Step indices in the order they finished. Every dependency reached
    /// through a non-cycle edge finishes before its dependent.
    post_order: Vec<usize>,
    /// Indices of steps found on a cycle, in detection order, no duplicates.
    cycle_members: Vec<usize>,
}

/// Index-based view of the dependency edges between steps.
pub struct DependencyGraph<'a> {
    steps: &'a [PlanStep],
    edges: Vec<Vec<usize>>,
    dependent_counts: Vec<usize>,
    missing: Vec<MissingDependency>,
}

impl<'a> DependencyGraph<'a> {
    /// Resolve every step's dependency ids to step positions.
    pub fn new(steps: &'a [PlanStep]) -> Self {
        let mut index: HashMap<&StepId, usize> = HashMap::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            index.entry(&step.id).or_insert(position);
        }

        let mut edges = Vec::with_capacity(steps.len());
        let mut dependent_counts = vec![0; steps.len()];
        let mut missing = Vec::new();

        for step in steps {
            let mut resolved = Vec::with_capacity(step.dependencies.len());
            for dependency in &step.dependencies {
                match index.get(dependency) {
                    Some(&target) => {
                        if !resolved.contains(&target) {
                            resolved.push(target);
                            dependent_counts[target] += 1;
                        }
                    }
                    None => missing.push(MissingDependency {
                        step_id: step.id.clone(),
                        step_title: step.title.clone(),
                        dependency: dependency.clone(),
                    }),
                }
            }
            edges.push(resolved);
        }

        Self {
            steps,
            edges,
            dependent_counts,
            missing,
        }
    }

    /// Dependency ids that did not resolve, one entry per dangling reference.
    pub fn missing_dependencies(&self) -> &[MissingDependency] {
        &self.missing
    }

    /// Whether any other step depends on the step at `position`.
    pub fn has_dependents(&self, position: usize) -> bool {
        self.dependent_counts.get(position).is_some_and(|&count| count > 0)
    }

    /// Steps participating in a dependency cycle.
    ///
    /// Every step is used as a traversal root in stored order, so cycles in
    /// fragments unreachable from other steps are still found. When a step
    /// is met again while it is still on the stack, every step on the stack
    /// from it upward lies on the cycle and is reported once.
    pub fn cycle_members(&self) -> Vec<&'a PlanStep> {
        self.traverse()
            .cycle_members
            .into_iter()
            .map(|position| &self.steps[position])
            .collect()
    }

    /// Longest dependency chain, listed from its first step to its last.
    ///
    /// A step without dependencies is a chain of length one; otherwise its
    /// chain is the longest chain among its dependencies with the step
    /// appended. Ties go to whichever candidate comes first (dependency order
    /// inside a step, stored step order across the plan). Edges that close a
    /// cycle are ignored.
    pub fn critical_path(&self) -> Vec<StepId> {
        let count = self.steps.len();
        // 0 marks "not finished yet"; finished chains are at least 1 long.
        let mut length = vec![0usize; count];
        let mut previous: Vec<Option<usize>> = vec![None; count];

        for node in self.traverse().post_order {
            let mut best: Option<usize> = None;
            for &dependency in &self.edges[node] {
                if length[dependency] == 0 {
                    continue;
                }
                if best.map_or(true, |current| length[dependency] > length[current]) {
                    best = Some(dependency);
                }
            }
            length[node] = 1 + best.map_or(0, |dependency| length[dependency]);
            previous[node] = best;
        }

        let mut end: Option<usize> = None;
        for position in 0..count {
            if end.map_or(true, |current| length[position] > length[current]) {
                end = Some(position);
            }
        }

        let mut path = Vec::new();
        let mut cursor = end;
        while let Some(position) = cursor {
            path.push(self.steps[position].id.clone());
            cursor = previous[position];
        }
        path.reverse();
        path
    }

    /// Dependency depth of every step, by position.
    ///
    /// Steps without (resolvable) dependencies sit at depth 0; any other step
    /// sits one level below its deepest dependency.
    pub fn depths(&self) -> Vec<usize> {
        let mut depth: Vec<Option<usize>> = vec![None; self.steps.len()];

        for node in self.traverse().post_order {
            let deepest = self.edges[node]
                .iter()
                .filter_map(|&dependency| depth[dependency])
                .max();
            depth[node] = Some(deepest.map_or(0, |level| level + 1));
        }

        depth.into_iter().map(Option::unwrap_or_default).collect()
    }

    /// Groups of two or more steps that share a dependency depth.
    ///
    /// Groups are ordered by depth; members keep stored step order.
    pub fn parallel_groups(&self) -> Vec<Vec<StepId>> {
        let mut by_depth: BTreeMap<usize, Vec<StepId>> = BTreeMap::new();
        for (step, depth) in self.steps.iter().zip(self.depths()) {
            by_depth.entry(depth).or_default().push(step.id.clone());
        }

        by_depth
            .into_values()
            .filter(|group| group.len() > 1)
            .collect()
    }

    fn traverse(&self) -> Traversal {
        let count = self.steps.len();
        let mut marks = vec![Mark::Unvisited; count];
        let mut in_cycle = vec![false; count];
        let mut post_order = Vec::with_capacity(count);
        let mut cycle_members = Vec::new();
        // (step position, index of the next edge to follow)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..count {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::OnStack;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;
                match self.edges[node].get(cursor) {
                    Some(&dependency) => {
                        frame.1 += 1;
                        match marks[dependency] {
                            Mark::Unvisited => {
                                marks[dependency] = Mark::OnStack;
                                stack.push((dependency, 0));
                            }
                            Mark::OnStack => {
                                let start = stack
                                    .iter()
                                    .position(|&(member, _)| member == dependency)
                                    .unwrap_or_default();
                                for &(member, _) in &stack[start..] {
                                    if !in_cycle[member] {
                                        in_cycle[member] = true;
                                        cycle_members.push(member);
                                    }
                                }
                            }
                            Mark::Done => {}
                        }
                    }
                    None => {
                        marks[node] = Mark::Done;
                        post_order.push(node);
                        stack.pop();
                    }
                }
            }
        }

        Traversal {
            post_order,
            cycle_members,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::{Complexity, Priority, RiskLevel, StepStatus};

    fn step(id: &str, deps: &[&str]) -> PlanStep {
        PlanStep {
            id: StepId::from(id),
            title: format!("Step {id}"),
            description: String::new(),
            priority: Priority::Medium,
            risk: RiskLevel::Low,
            estimated_complexity: Complexity::default(),
            dependencies: deps.iter().map(|dep| StepId::from(*dep)).collect(),
            affected_files: BTreeSet::new(),
            actions: Vec::new(),
            status: StepStatus::Pending,
            notes: None,
        }
    }

    fn ids(path: &[StepId]) -> Vec<&str> {
        path.iter().map(StepId::as_str).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::new(&[]);
        assert!(graph.critical_path().is_empty());
        assert!(graph.parallel_groups().is_empty());
        assert!(graph.cycle_members().is_empty());
        assert!(graph.missing_dependencies().is_empty());
    }

    #[test]
    fn test_single_step_is_its_own_critical_path() {
        let steps = vec![step("a", &[])];
        let graph = DependencyGraph::new(&steps);
        assert_eq!(ids(&graph.critical_path()), vec!["a"]);
        assert!(!graph.has_dependents(0));
    }

    #[test]
    fn test_critical_path_follows_longest_chain() {
        let steps = vec![
            step("a", &[]),
            step("b", &["a"]),
            step("c", &[]),
            step("d", &["b", "c"]),
            step("e", &["c"]),
        ];
        let graph = DependencyGraph::new(&steps);
        assert_eq!(ids(&graph.critical_path()), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_critical_path_ties_prefer_first_encountered() {
        let steps = vec![
            step("a", &[]),
            step("b", &[]),
            step("c", &["b", "a"]),
            step("x", &[]),
            step("y", &["x"]),
        ];
        let graph = DependencyGraph::new(&steps);
        // c's dependencies tie at length 1; "b" is listed first. The two
        // length-2 chains tie as well; c precedes y in stored order.
        assert_eq!(ids(&graph.critical_path()), vec!["b", "c"]);
    }

    #[test]
    fn test_critical_path_consecutive_steps_are_linked() {
        let steps = vec![
            step("d", &["c"]),
            step("c", &["b"]),
            step("b", &["a"]),
            step("a", &[]),
            step("z", &["a"]),
        ];
        let graph = DependencyGraph::new(&steps);
        let path = graph.critical_path();
        assert_eq!(ids(&path), vec!["a", "b", "c", "d"]);
        for pair in path.windows(2) {
            let later = steps.iter().find(|s| s.id == pair[1]).unwrap();
            assert!(later.depends_on(&pair[0]));
        }
    }

    #[test]
    fn test_cycle_reports_every_member() {
        let steps = vec![step("a", &["b"]), step("b", &["c"]), step("c", &["a"])];
        let graph = DependencyGraph::new(&steps);
        let members = graph.cycle_members();
        let names: Vec<&str> = members.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let steps = vec![
            step("a", &["b", "c"]),
            step("b", &["d"]),
            step("c", &["d"]),
            step("d", &[]),
        ];
        let graph = DependencyGraph::new(&steps);
        assert!(graph.cycle_members().is_empty());
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let steps = vec![step("a", &["a"]), step("b", &[])];
        let graph = DependencyGraph::new(&steps);
        let members = graph.cycle_members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id.as_str(), "a");
    }

    #[test]
    fn test_cycle_in_disconnected_fragment_is_found() {
        let steps = vec![
            step("a", &[]),
            step("b", &["a"]),
            step("x", &["y"]),
            step("y", &["x"]),
        ];
        let graph = DependencyGraph::new(&steps);
        assert_eq!(graph.cycle_members().len(), 2);
    }

    #[test]
    fn test_cyclic_graph_still_yields_a_path() {
        let steps = vec![step("a", &["b"]), step("b", &["a"])];
        let graph = DependencyGraph::new(&steps);
        assert_eq!(graph.critical_path().len(), 2);
    }

    #[test]
    fn test_depths_and_parallel_groups() {
        let steps = vec![
            step("a", &[]),
            step("b", &[]),
            step("c", &["a"]),
            step("d", &["a", "b"]),
            step("e", &["d"]),
        ];
        let graph = DependencyGraph::new(&steps);
        assert_eq!(graph.depths(), vec![0, 0, 1, 1, 2]);

        let parallel_groups = graph.parallel_groups();
        let groups: Vec<Vec<&str>> = parallel_groups
            .iter()
            .map(|group| ids(group))
            .collect();
        assert_eq!(groups, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_missing_dependencies_reported_individually() {
        let steps = vec![step("a", &["ghost", "phantom"]), step("b", &["a", "ghost"])];
        let graph = DependencyGraph::new(&steps);
        let missing: Vec<(&str, &str)> = graph
            .missing_dependencies()
            .iter()
            .map(|m| (m.step_id.as_str(), m.dependency.as_str()))
            .collect();
        assert_eq!(
            missing,
            vec![("a", "ghost"), ("a", "phantom"), ("b", "ghost")]
        );
        // Dangling ids do not count as edges.
        assert_eq!(graph.depths(), vec![0, 1]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let names: Vec<String> = (0..20_000).map(|i| format!("s{i}")).collect();
        let steps: Vec<PlanStep> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    step(name, &[])
                } else {
                    step(name, &[names[i - 1].as_str()])
                }
            })
            .collect();
        let graph = DependencyGraph::new(&steps);
        assert_eq!(graph.critical_path().len(), 20_000);
        assert!(graph.cycle_members().is_empty());
    }
}
