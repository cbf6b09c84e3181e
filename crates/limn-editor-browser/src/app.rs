//! Application wiring: element lookups, event listeners, and the glue
//! between DOM events and the session.
//!
//! All state hangs off one `Rc<AppState>`; event closures capture clones of
//! the `Rc` and go through `RefCell` borrows that are always released before
//! control returns to the browser.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use limn_editor_core::fonts::FONT_CATALOG;
use limn_editor_core::scaffold::DEFAULT_DOCUMENT;
use limn_editor_core::{
    Command, Debouncer, EditorError, Notice, Session, ToolbarState, dispatch, failure_notice,
    insert_image, insert_link,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlIFrameElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::events::attach_frame_observers;
use crate::frame::FrameSurface;
use crate::message::MessageBox;
use crate::modal::Modal;
use crate::panels::{SplitterHandles, wire_splitter};
use crate::scheduler::BrowserScheduler;
use crate::{download, js_err};

/// Element ids the editor mounts onto.
#[derive(Debug, Clone)]
pub struct MountConfig {
    pub source_input: &'static str,
    pub preview_frame: &'static str,
    pub render_button: &'static str,
    pub sync_button: &'static str,
    pub download_button: &'static str,
    pub message_box: &'static str,
    pub toolbar: &'static str,
    pub left_panel: &'static str,
    pub right_panel: &'static str,
    pub splitter: &'static str,
    pub container: &'static str,
    pub fore_color_picker: &'static str,
    pub back_color_picker: &'static str,
    pub block_back_color_picker: &'static str,
    pub font_size_select: &'static str,
    pub font_family_select: &'static str,
    pub clear_format_button: &'static str,
    pub insert_link_button: &'static str,
    pub insert_image_button: &'static str,
    pub link_modal: &'static str,
    pub image_modal: &'static str,
    pub confirm_link_button: &'static str,
    pub confirm_image_button: &'static str,
    pub link_url_input: &'static str,
    pub link_text_input: &'static str,
    pub image_url_input: &'static str,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            source_input: "htmlCode",
            preview_frame: "previewFrame",
            render_button: "renderButton",
            sync_button: "syncButton",
            download_button: "downloadButton",
            message_box: "messageBox",
            toolbar: "editorToolbar",
            left_panel: "leftPanel",
            right_panel: "rightPanel",
            splitter: "splitter",
            container: "app-container",
            fore_color_picker: "fontColorPicker",
            back_color_picker: "fontBgColorPicker",
            block_back_color_picker: "divBgColorPicker",
            font_size_select: "fontSizeSelect",
            font_family_select: "fontFamilySelect",
            clear_format_button: "clearFormatBtn",
            insert_link_button: "insertLinkBtn",
            insert_image_button: "insertImageBtn",
            link_modal: "linkModal",
            image_modal: "imageModal",
            confirm_link_button: "confirmLinkBtn",
            confirm_image_button: "confirmImageBtn",
            link_url_input: "linkURL",
            link_text_input: "linkText",
            image_url_input: "imageURL",
        }
    }
}

struct AppState {
    session: RefCell<Session<FrameSurface>>,
    sync: RefCell<Debouncer<BrowserScheduler>>,
    messages: MessageBox,
    source_input: HtmlTextAreaElement,
    frame: HtmlIFrameElement,
    toolbar: Element,
    fore_color: HtmlInputElement,
    back_color: HtmlInputElement,
    block_back_color: HtmlInputElement,
    font_size: HtmlSelectElement,
    font_family: HtmlSelectElement,
    link_modal: Modal,
    image_modal: Modal,
    link_url: HtmlInputElement,
    link_text: HtmlInputElement,
    image_url: HtmlInputElement,
    // Held for their side effects; dropping detaches.
    listeners: RefCell<Vec<EventListener>>,
    frame_observers: RefCell<Vec<EventListener>>,
    splitter: RefCell<Option<SplitterHandles>>,
}

/// The mounted editor. Dropping it detaches every listener.
pub struct EditorApp {
    state: Rc<AppState>,
}

impl EditorApp {
    /// Mount the editor onto the ids in `config` and render the initial
    /// preview.
    pub fn mount(config: &MountConfig) -> Result<Self, EditorError> {
        let document = gloo_utils::document();

        let source_input: HtmlTextAreaElement = lookup(&document, config.source_input)?;
        if source_input.value().is_empty() {
            source_input.set_value(DEFAULT_DOCUMENT);
        }

        let state = Rc::new(AppState {
            session: RefCell::new(Session::new(source_input.value())),
            sync: RefCell::new(Debouncer::new(BrowserScheduler)),
            messages: MessageBox::new(lookup(&document, config.message_box)?),
            frame: lookup(&document, config.preview_frame)?,
            toolbar: lookup(&document, config.toolbar)?,
            fore_color: lookup(&document, config.fore_color_picker)?,
            back_color: lookup(&document, config.back_color_picker)?,
            block_back_color: lookup(&document, config.block_back_color_picker)?,
            font_size: lookup(&document, config.font_size_select)?,
            font_family: lookup(&document, config.font_family_select)?,
            link_modal: Modal::new(lookup(&document, config.link_modal)?),
            image_modal: Modal::new(lookup(&document, config.image_modal)?),
            link_url: lookup(&document, config.link_url_input)?,
            link_text: lookup(&document, config.link_text_input)?,
            image_url: lookup(&document, config.image_url_input)?,
            source_input,
            listeners: RefCell::new(Vec::new()),
            frame_observers: RefCell::new(Vec::new()),
            splitter: RefCell::new(None),
        });

        populate_font_select(&document, &state.font_family)?;
        *state.splitter.borrow_mut() = Some(wire_splitter(
            &lookup::<HtmlElement>(&document, config.splitter)?,
            &lookup::<HtmlElement>(&document, config.left_panel)?,
            &lookup::<HtmlElement>(&document, config.right_panel)?,
            &lookup::<HtmlElement>(&document, config.container)?,
        ));

        wire(&state, &document, config)?;
        render_preview(&state);
        tracing::info!("editor mounted");
        Ok(Self { state })
    }

    /// Leak the app so its listeners live for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self.state);
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, EditorError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EditorError::operation(format!("missing element #{id}")))?
        .dyn_into()
        .map_err(|_| EditorError::operation(format!("element #{id} has an unexpected type")))
}

fn populate_font_select(
    document: &Document,
    select: &HtmlSelectElement,
) -> Result<(), EditorError> {
    select.set_inner_html(r#"<option value="" disabled selected>Font Family</option>"#);
    for &font in FONT_CATALOG {
        let option: HtmlOptionElement = document
            .create_element("option")
            .map_err(js_err)?
            .unchecked_into();
        option.set_value(font);
        option.set_text_content(Some(font));
        let _ = option
            .style()
            .set_property("font-family", &format!("'{font}', sans-serif"));
        select.append_child(option.as_ref()).map_err(js_err)?;
    }
    Ok(())
}

fn wire(state: &Rc<AppState>, document: &Document, config: &MountConfig) -> Result<(), EditorError> {
    let mut listeners = Vec::new();

    let render_button: HtmlElement = lookup(document, config.render_button)?;
    listeners.push(on_click(state, &render_button, render_preview));

    let sync_button: HtmlElement = lookup(document, config.sync_button)?;
    listeners.push(on_click(state, &sync_button, write_back_now));

    let download_button: HtmlElement = lookup(document, config.download_button)?;
    listeners.push(on_click(state, &download_button, download_source));

    // Toggle buttons delegate through `data-command` so new buttons need no
    // extra wiring.
    {
        let toolbar = state.toolbar.clone();
        let state = Rc::clone(state);
        listeners.push(EventListener::new(toolbar.as_ref(), "click", move |event| {
            if let Some(command) = delegated_command(event) {
                run_command(&state, command, None);
            }
        }));
    }

    listeners.push(on_value_change(state, &state.fore_color, Command::ForeColor));
    listeners.push(on_value_change(state, &state.back_color, Command::BackColor));
    listeners.push(on_value_change(
        state,
        &state.block_back_color,
        Command::BlockBackColor,
    ));

    {
        let state = Rc::clone(state);
        let select = state.font_size.clone();
        listeners.push(EventListener::new(select.clone().as_ref(), "change", move |_| {
            let value = select.value();
            if !value.is_empty() {
                run_command(&state, Command::FontSize, Some(&value));
            }
        }));
    }
    {
        let state = Rc::clone(state);
        let select = state.font_family.clone();
        listeners.push(EventListener::new(select.clone().as_ref(), "change", move |_| {
            let value = select.value();
            if !value.is_empty() {
                run_command(&state, Command::FontName, Some(&value));
            }
        }));
    }

    let clear_format: HtmlElement = lookup(document, config.clear_format_button)?;
    listeners.push(on_click(state, &clear_format, |state| {
        run_command(state, Command::RemoveFormat, None);
    }));

    let insert_link_button: HtmlElement = lookup(document, config.insert_link_button)?;
    listeners.push(on_click(state, &insert_link_button, |state| {
        state.session.borrow_mut().capture_selection();
        state.link_modal.open();
        let _ = state.link_url.focus();
    }));
    let insert_image_button: HtmlElement = lookup(document, config.insert_image_button)?;
    listeners.push(on_click(state, &insert_image_button, |state| {
        state.session.borrow_mut().capture_selection();
        state.image_modal.open();
        let _ = state.image_url.focus();
    }));

    let confirm_link_button: HtmlElement = lookup(document, config.confirm_link_button)?;
    listeners.push(on_click(state, &confirm_link_button, confirm_link));
    let confirm_image_button: HtmlElement = lookup(document, config.confirm_image_button)?;
    listeners.push(on_click(state, &confirm_image_button, confirm_image));

    // Close buttons inside either modal dismiss the modal they live in.
    if let Ok(buttons) = document.query_selector_all(".modal .close-button") {
        for i in 0..buttons.length() {
            let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let state = Rc::clone(state);
            listeners.push(EventListener::new(
                button.clone().as_ref(),
                "click",
                move |_| {
                    if state.link_modal.contains(&button) {
                        close_link_modal(&state);
                    } else if state.image_modal.contains(&button) {
                        close_image_modal(&state);
                    }
                },
            ));
        }
    }

    // A click on a modal backdrop dismisses it.
    {
        let state = Rc::clone(state);
        listeners.push(EventListener::new(
            gloo_utils::window().as_ref(),
            "click",
            move |event| {
                let Some(target) = event.target() else {
                    return;
                };
                if state.link_modal.is_backdrop(&target) {
                    close_link_modal(&state);
                } else if state.image_modal.is_backdrop(&target) {
                    close_image_modal(&state);
                }
            },
        ));
    }

    *state.listeners.borrow_mut() = listeners;
    Ok(())
}

fn on_click(
    state: &Rc<AppState>,
    element: &HtmlElement,
    action: impl Fn(&Rc<AppState>) + 'static,
) -> EventListener {
    let state = Rc::clone(state);
    EventListener::new(element.as_ref(), "click", move |_| action(&state))
}

fn on_value_change(
    state: &Rc<AppState>,
    picker: &HtmlInputElement,
    command: Command,
) -> EventListener {
    let state = Rc::clone(state);
    let picker = picker.clone();
    EventListener::new(picker.clone().as_ref(), "change", move |_| {
        run_command(&state, command, Some(&picker.value()));
    })
}

/// Resolve a toolbar click to the command of the nearest `data-command`
/// ancestor, if any.
fn delegated_command(event: &Event) -> Option<Command> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let button = target.closest("[data-command]").ok()??;
    Command::parse(&button.get_attribute("data-command")?)
}

fn run_command(state: &Rc<AppState>, command: Command, value: Option<&str>) {
    let result = dispatch(&mut state.session.borrow_mut(), command, value);
    match result {
        Ok(notice) => {
            schedule_write_back(state);
            refresh_toolbar(state);
            state.messages.show(notice);
        }
        Err(err) => {
            tracing::warn!(command = command.as_str(), error = %err, "command failed");
            state.messages.show(failure_notice(Some(command), &err));
        }
    }
}

/// Rebuild the preview from the source view, making it editable.
fn render_preview(state: &Rc<AppState>) {
    let result = {
        let mut session = state.session.borrow_mut();
        session.set_source(state.source_input.value());
        let frame = state.frame.clone();
        session.render_with(|source| FrameSurface::build(&frame, source))
    };
    if let Err(err) = result {
        tracing::warn!(error = %err, "render failed");
        state.messages.show(failure_notice(None, &err));
        return;
    }

    attach_observers(state);
    refresh_toolbar(state);
    state
        .messages
        .show(Notice::info("HTML rendered. The preview is now editable."));
}

/// (Re-)attach the input/selection observers to the current surface. The old
/// observers pointed into the previous frame document and are dropped.
fn attach_observers(state: &Rc<AppState>) {
    let observers = {
        let session = state.session.borrow();
        let Some(surface) = session.surface() else {
            return;
        };
        let input_state = Rc::clone(state);
        let selection_state = Rc::clone(state);
        attach_frame_observers(
            surface,
            move || {
                schedule_write_back(&input_state);
                refresh_toolbar(&input_state);
            },
            move || refresh_toolbar(&selection_state),
        )
    };
    match observers {
        Ok(observers) => *state.frame_observers.borrow_mut() = observers,
        Err(err) => tracing::warn!(error = %err, "observer attachment failed"),
    }
}

/// Restart the quiescence window; when it elapses, copy the preview's markup
/// back into the source view.
fn schedule_write_back(state: &Rc<AppState>) {
    let task_state = Rc::clone(state);
    state.sync.borrow_mut().poke(move || {
        let result = task_state.session.borrow_mut().write_back();
        match result {
            Ok(()) => task_state
                .source_input
                .set_value(task_state.session.borrow().source()),
            Err(err) => tracing::warn!(error = %err, "debounced write-back failed"),
        }
    });
}

/// Manual sync button: immediate write-back, superseding any pending one.
fn write_back_now(state: &Rc<AppState>) {
    state.sync.borrow_mut().cancel();
    let result = state.session.borrow_mut().write_back();
    match result {
        Ok(()) => {
            state.source_input.set_value(state.session.borrow().source());
            state
                .messages
                .show(Notice::info("HTML synced from preview to source."));
        }
        Err(err) => {
            tracing::warn!(error = %err, "manual sync failed");
            state.messages.show(failure_notice(None, &err));
        }
    }
}

fn download_source(state: &Rc<AppState>) {
    let export = {
        let mut session = state.session.borrow_mut();
        // The source view is authoritative even if the user edited it without
        // re-rendering.
        session.set_source(state.source_input.value());
        session.export()
    };
    match download::download(&export) {
        Ok(()) => state
            .messages
            .show(Notice::info(format!("'{}' downloaded.", export.filename))),
        Err(err) => {
            tracing::warn!(error = %err, "download failed");
            state.messages.show(Notice::long("Error downloading HTML."));
        }
    }
}

fn refresh_toolbar(state: &Rc<AppState>) {
    let toolbar_state = {
        let session = state.session.borrow();
        session
            .surface()
            .map(ToolbarState::read_from)
            .unwrap_or_default()
    };

    if let Ok(buttons) = state.toolbar.query_selector_all("[data-command]") {
        for i in 0..buttons.length() {
            let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(command) = button
                .get_attribute("data-command")
                .as_deref()
                .and_then(Command::parse)
            else {
                continue;
            };
            if toolbar_state.is_active(command) {
                let _ = button.class_list().add_1("active");
            } else {
                let _ = button.class_list().remove_1("active");
            }
        }
    }

    state.fore_color.set_value(&toolbar_state.fore_color);
    state.back_color.set_value(&toolbar_state.back_color);
    state
        .block_back_color
        .set_value(&toolbar_state.block_back_color);
    state.font_size.set_value(&toolbar_state.font_size);
    state.font_family.set_value(&toolbar_state.font_family);
}

fn confirm_link(state: &Rc<AppState>) {
    let url = state.link_url.value();
    if url.is_empty() {
        state
            .messages
            .show(Notice::info("Please enter a URL for the link."));
        return;
    }
    let text = state.link_text.value();
    let text = (!text.is_empty()).then_some(text);

    let result = insert_link(&mut state.session.borrow_mut(), &url, text.as_deref());
    match result {
        Ok(notice) => {
            schedule_write_back(state);
            refresh_toolbar(state);
            state.messages.show(notice);
        }
        Err(err) => {
            tracing::warn!(error = %err, "link insertion failed");
            state
                .messages
                .show(failure_notice(Some(Command::CreateLink), &err));
        }
    }
    close_link_modal(state);
}

fn confirm_image(state: &Rc<AppState>) {
    let url = state.image_url.value();
    if url.is_empty() {
        state.messages.show(Notice::info("Please enter an image URL."));
        return;
    }

    let result = insert_image(&mut state.session.borrow_mut(), &url);
    match result {
        Ok(notice) => {
            schedule_write_back(state);
            refresh_toolbar(state);
            state.messages.show(notice);
        }
        Err(err) => {
            tracing::warn!(error = %err, "image insertion failed");
            state
                .messages
                .show(failure_notice(Some(Command::InsertImage), &err));
        }
    }
    close_image_modal(state);
}

fn close_link_modal(state: &Rc<AppState>) {
    state.link_modal.close();
    state.session.borrow_mut().clear_pending_selection();
}

fn close_image_modal(state: &Rc<AppState>) {
    state.image_modal.close();
    state.session.borrow_mut().clear_pending_selection();
}
