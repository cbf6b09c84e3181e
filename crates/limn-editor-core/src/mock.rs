//! In-memory surface and scheduler doubles for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use smol_str::SmolStr;

use crate::command::Command;
use crate::error::EditorError;
use crate::scaffold::body_of;
use crate::surface::EditSurface;
use crate::sync::Scheduler;

/// A selection handle into the mock surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSelection {
    node: usize,
    collapsed: bool,
    text: Option<String>,
}

struct MockNode {
    tag: SmolStr,
    parent: Option<usize>,
    background: Option<SmolStr>,
}

/// An editable surface backed by plain fields.
///
/// Stores the body markup verbatim, a flat node tree for block-ancestor
/// walks, and records every applied command so tests can assert on effects.
pub struct MockSurface {
    body: String,
    nodes: Vec<MockNode>,
    selection: Option<MockSelection>,
    states: HashMap<Command, bool>,
    values: HashMap<Command, SmolStr>,
    applied: Vec<(Command, Option<String>)>,
    links: Vec<(String, String)>,
    default_font: Option<String>,
    fail_next_apply: bool,
}

impl MockSurface {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: body.to_string(),
            nodes: vec![MockNode {
                tag: SmolStr::new_static("BODY"),
                parent: None,
                background: None,
            }],
            selection: None,
            states: HashMap::new(),
            values: HashMap::new(),
            applied: Vec::new(),
            links: Vec::new(),
            default_font: None,
            fail_next_apply: false,
        }
    }

    /// Build from a full scaffolded document, keeping only the body markup,
    /// which mirrors what a real surface exposes through `markup()`.
    pub fn from_document(document: &str) -> Self {
        Self::with_body(body_of(document).unwrap_or(document))
    }

    pub fn set_body(&mut self, body: &str) {
        self.body = body.to_string();
    }

    /// Add a node under `parent`, returning its handle. Node 0 is the root.
    pub fn push_node(&mut self, tag: &str, parent: usize) -> usize {
        self.nodes.push(MockNode {
            tag: SmolStr::new(tag),
            parent: Some(parent),
            background: None,
        });
        self.nodes.len() - 1
    }

    pub fn select_caret_in(&mut self, node: usize) {
        self.selection = Some(MockSelection {
            node,
            collapsed: true,
            text: None,
        });
    }

    pub fn select_text_in(&mut self, node: usize, text: &str) {
        self.selection = Some(MockSelection {
            node,
            collapsed: false,
            text: Some(text.to_string()),
        });
    }

    pub fn select_text(&mut self, text: &str) {
        self.select_text_in(0, text);
    }

    pub fn set_state(&mut self, command: Command, active: bool) {
        self.states.insert(command, active);
    }

    pub fn set_value(&mut self, command: Command, value: &str) {
        self.values.insert(command, SmolStr::new(value));
    }

    pub fn set_background(&mut self, node: usize, color: &str) {
        self.nodes[node].background = Some(SmolStr::new(color));
    }

    pub fn background_of(&self, node: usize) -> Option<&str> {
        self.nodes[node].background.as_deref()
    }

    pub fn applied_commands(&self) -> &[(Command, Option<String>)] {
        &self.applied
    }

    /// `(href, visible text)` pairs, in creation order.
    pub fn created_links(&self) -> &[(String, String)] {
        &self.links
    }

    pub fn default_font(&self) -> Option<&str> {
        self.default_font.as_deref()
    }

    /// Make the next `apply` call fail, as a thrown platform error would.
    pub fn fail_next_apply(&mut self) {
        self.fail_next_apply = true;
    }
}

impl EditSurface for MockSurface {
    type Selection = MockSelection;
    type Node = usize;

    fn apply(&mut self, command: Command, value: Option<&str>) -> Result<(), EditorError> {
        if self.fail_next_apply {
            self.fail_next_apply = false;
            return Err(EditorError::operation("injected platform failure"));
        }
        self.applied.push((command, value.map(str::to_string)));
        if Command::TOGGLES.contains(&command) {
            let state = self.states.entry(command).or_insert(false);
            *state = !*state;
        }
        if command == Command::CreateLink {
            let url = value.unwrap_or_default().to_string();
            let text = self
                .selection
                .as_ref()
                .filter(|sel| !sel.collapsed)
                .and_then(|sel| sel.text.clone())
                .unwrap_or_else(|| url.clone());
            self.links.push((url, text));
        }
        Ok(())
    }

    fn query_state(&self, command: Command) -> bool {
        self.states.get(&command).copied().unwrap_or(false)
    }

    fn query_value(&self, command: Command) -> SmolStr {
        self.values.get(&command).cloned().unwrap_or_default()
    }

    fn selection(&self) -> Option<MockSelection> {
        self.selection.clone()
    }

    fn is_collapsed(&self, selection: &MockSelection) -> bool {
        selection.collapsed
    }

    fn selection_container(&self, selection: &MockSelection) -> Option<usize> {
        Some(selection.node)
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn tag_name(&self, node: &usize) -> SmolStr {
        self.nodes[*node].tag.clone()
    }

    fn is_root(&self, node: &usize) -> bool {
        *node == 0
    }

    fn set_block_background(&mut self, node: &usize, color: &str) -> Result<(), EditorError> {
        self.nodes[*node].background = Some(SmolStr::new(color));
        Ok(())
    }

    fn block_background(&self, node: &usize) -> Option<SmolStr> {
        self.nodes[*node].background.clone()
    }

    fn replace_with_text(
        &mut self,
        selection: &MockSelection,
        text: &str,
    ) -> Result<MockSelection, EditorError> {
        Ok(MockSelection {
            node: selection.node,
            collapsed: false,
            text: Some(text.to_string()),
        })
    }

    fn insert_text(&mut self, text: &str) -> Result<MockSelection, EditorError> {
        self.body.push_str(text);
        Ok(MockSelection {
            node: 0,
            collapsed: false,
            text: Some(text.to_string()),
        })
    }

    fn restore_selection(&mut self, selection: &MockSelection) -> Result<(), EditorError> {
        self.selection = Some(selection.clone());
        Ok(())
    }

    fn set_default_font(&mut self, family: &str) -> Result<(), EditorError> {
        self.default_font = Some(family.to_string());
        Ok(())
    }

    fn markup(&self) -> Result<String, EditorError> {
        Ok(self.body.clone())
    }
}

type TaskMap = Rc<RefCell<HashMap<u64, Box<dyn FnOnce()>>>>;

/// A scheduler driven by hand from tests.
#[derive(Clone, Default)]
pub struct MockScheduler {
    tasks: TaskMap,
    next_id: Rc<RefCell<u64>>,
}

/// Cancels its task when dropped, like a real timer handle.
pub struct MockHandle {
    id: u64,
    tasks: TaskMap,
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.tasks.borrow_mut().remove(&self.id);
    }
}

impl MockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks still scheduled.
    pub fn pending_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run every task still scheduled, as if all timers fired.
    pub fn fire_all(&self) {
        let tasks: Vec<_> = {
            let mut map = self.tasks.borrow_mut();
            let ids: Vec<u64> = map.keys().copied().collect();
            ids.into_iter().filter_map(|id| map.remove(&id)).collect()
        };
        for task in tasks {
            task();
        }
    }
}

impl Scheduler for MockScheduler {
    type Handle = MockHandle;

    fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce()>) -> MockHandle {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.tasks.borrow_mut().insert(id, task);
        MockHandle {
            id,
            tasks: Rc::clone(&self.tasks),
        }
    }
}
