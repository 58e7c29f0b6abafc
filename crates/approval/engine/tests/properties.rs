//! Property tests for status resolution, approver fallback and projection
//! ordering.

use approval_engine::*;
use approval_types::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

const NODE_IDS: [&str; 6] = ["n0", "n1", "n2", "n3", "n4", "n5"];

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Pending),
        Just(TaskStatus::Running),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Approved),
        Just(TaskStatus::Rejected),
    ]
}

fn arb_closed_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![Just(TaskStatus::Completed), Just(TaskStatus::Approved)]
}

fn arb_task(node_id: &'static str) -> impl Strategy<Value = TaskEntry> {
    (arb_status(), proptest::option::of("[A-Z][a-z]{2,8}")).prop_map(move |(status, name)| {
        let task = TaskEntry::new(node_id, status);
        match name {
            Some(name) => task.with_assignee(name),
            None => task,
        }
    })
}

fn arb_ledger_task() -> impl Strategy<Value = TaskEntry> {
    prop::sample::select(NODE_IDS.to_vec()).prop_flat_map(arb_task)
}

fn arb_approver_type() -> impl Strategy<Value = Option<ApproverType>> {
    prop_oneof![
        Just(None),
        Just(Some(ApproverType::DepartmentManager)),
        Just(Some(ApproverType::TeamLeader)),
        Just(Some(ApproverType::SpecificMembers)),
    ]
}

/// Approval nodes n0..n5 with small integer ordinals, so ties are common.
fn arb_nodes() -> impl Strategy<Value = Vec<ProcessNode>> {
    prop::collection::vec((0u8..4, arb_approver_type()), NODE_IDS.len()).prop_map(|specs| {
        specs
            .into_iter()
            .zip(NODE_IDS)
            .map(|((order, approver_type), id)| {
                let mut node = ProcessNode::approval(id, id.to_uppercase()).with_order(order as f64);
                node.approver_config.approver_type = approver_type;
                node
            })
            .collect()
    })
}

fn arb_instance() -> impl Strategy<Value = WorkflowInstance> {
    (
        prop::collection::vec(arb_ledger_task(), 0..20),
        proptest::option::of(prop::sample::select(NODE_IDS.to_vec())),
    )
        .prop_map(|(tasks, current)| {
            let inst = WorkflowInstance::new(EntityRef::new("leave", "L-1"))
                .with_id("inst-prop")
                .with_tasks(tasks);
            match current {
                Some(id) => inst.with_current_node(id),
                None => inst,
            }
        })
}

fn node() -> ProcessNode {
    ProcessNode::approval("n0", "N0")
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A single rejected task rejects the node whatever else is recorded.
    #[test]
    fn rejection_dominates(
        mut tasks in prop::collection::vec(arb_task("n0"), 0..10),
        position in any::<prop::sample::Index>(),
    ) {
        let at = position.index(tasks.len() + 1);
        tasks.insert(at, TaskEntry::rejected("n0"));
        prop_assert_eq!(resolve_status(&node(), &tasks), NodeStatus::Rejected);
    }

    /// Fully closed nodes complete; one more pending task reopens them.
    #[test]
    fn closed_then_pending_flips_to_in_progress(
        statuses in prop::collection::vec(arb_closed_status(), 1..10),
    ) {
        let mut tasks: Vec<TaskEntry> = statuses
            .into_iter()
            .map(|s| TaskEntry::new("n0", s))
            .collect();
        prop_assert_eq!(resolve_status(&node(), &tasks), NodeStatus::Completed);

        tasks.push(TaskEntry::pending("n0"));
        prop_assert_eq!(resolve_status(&node(), &tasks), NodeStatus::InProgress);
    }

    /// Without tasks the definition provides exactly one row; any task
    /// replaces it with ledger rows.
    #[test]
    fn definition_row_until_first_task(
        approver_type in arb_approver_type(),
        task in arb_task("n0"),
    ) {
        let mut n = node();
        n.approver_config.approver_type = approver_type;
        let empty: Vec<TaskEntry> = Vec::new();

        let rows = resolve_approvers(&n, &empty, &empty);
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].status, TaskStatus::Pending);

        let with_task = vec![task.clone()];
        let rows = resolve_approvers(&n, &with_task, &empty);
        prop_assert_eq!(rows.len(), 1);
        prop_assert_eq!(rows[0].status, task.status);
        prop_assert_eq!(
            rows[0].name.as_str(),
            task.assignee_name().unwrap_or("unknown approver")
        );
    }

    /// Projecting the same snapshot twice gives identical output.
    #[test]
    fn projection_is_idempotent(nodes in arb_nodes(), inst in arb_instance()) {
        let first = project(&nodes, Some(&inst));
        let second = project(&nodes, Some(&inst));
        prop_assert_eq!(first, second);
    }

    /// Output ordinals never decrease, and ties keep input order.
    #[test]
    fn projection_is_ordered(nodes in arb_nodes(), inst in arb_instance()) {
        let views = project(&nodes, Some(&inst));

        for pair in views.windows(2) {
            prop_assert!(pair[0].node.order <= pair[1].node.order);
            if pair[0].node.order == pair[1].node.order {
                let pos = |id: &NodeId| nodes.iter().position(|n| &n.id == id);
                prop_assert!(pos(&pair[0].node.id) < pos(&pair[1].node.id));
            }
        }
    }

    /// Every projected node is visible and has at least one approver row.
    #[test]
    fn projected_nodes_are_visible_and_staffed(nodes in arb_nodes(), inst in arb_instance()) {
        for view in project(&nodes, Some(&inst)) {
            prop_assert!(view.visible);
            prop_assert!(!view.approvers.is_empty());
            let tasks = inst.tasks_for_node(&view.node.id);
            prop_assert_eq!(
                view.status,
                resolve_status(&view.node, tasks.iter().copied())
            );
        }
    }
}
