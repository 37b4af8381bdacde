//! Cycle detection over the validated dependency graph.

use crate::log_trace;
use crate::validation::ValidatedTask;

/// Visitation tag for the depth-first traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Work item for the explicit traversal stack.
///
/// `Enter` examines a task and pushes its dependencies; `Exit` retires a
/// task once its whole dependency subtree has been explored.
enum Frame {
    Enter(usize),
    Exit(usize),
}

/// Check whether the dependency relation contains a cycle.
///
/// Three-state depth-first traversal started from every still-unvisited
/// task, so disconnected components are all covered. The stack is explicit:
/// traversal depth is bounded by the task count, not the call stack. An
/// edge into an `InProgress` task is a back-edge and reports immediately;
/// `Done` subtrees are never re-traversed. A self-dependency is caught as
/// the one-step case.
pub fn contains_cycle(tasks: &[ValidatedTask], verbosity: u8) -> bool {
    let mut state = vec![Visit::Unvisited; tasks.len()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..tasks.len() {
        if state[root] != Visit::Unvisited {
            continue;
        }
        stack.push(Frame::Enter(root));

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(index) => match state[index] {
                    Visit::InProgress => {
                        log_trace!(verbosity, "back-edge into task {}", index);
                        return true;
                    }
                    Visit::Done => {}
                    Visit::Unvisited => {
                        state[index] = Visit::InProgress;
                        stack.push(Frame::Exit(index));
                        for &dep in &tasks[index].dependencies {
                            stack.push(Frame::Enter(dep));
                        }
                    }
                },
                Frame::Exit(index) => state[index] = Visit::Done,
            }
        }
    }

    false
}
