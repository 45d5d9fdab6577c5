//! Declarative UI component tree
//!
//! Serializes to the JSON the prebuilt FastUI client renders: every component
//! carries a `"type"` discriminator and camelCase fields, and absent optional
//! fields are left out instead of being sent as `null`.

use serde::Serialize;

use super::rows::TableRow;

/// A full page response: the list the client renders top to bottom.
pub type Components = Vec<Component>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    Text {
        text: String,
    },
    Paragraph {
        text: String,
    },
    PageTitle {
        text: String,
    },
    Heading {
        text: String,
        level: u8,
    },
    Link(Link),
    Button(Button),
    Page {
        components: Vec<Component>,
    },
    Navbar(Navbar),
    Footer(Footer),
    Table(Table),
    Pagination(Pagination),
    ModelForm(ModelForm),
    Modal(Modal),
    FireEvent {
        event: Event,
    },
}

impl Component {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn page_title(text: impl Into<String>) -> Self {
        Self::PageTitle { text: text.into() }
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn fire(event: Event) -> Self {
        Self::FireEvent { event }
    }
}

/// Client-side action attached to links, buttons and `FireEvent`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Event {
    GoTo {
        url: String,
    },
    Back,
    /// Named in-page event, used to open and close modals.
    Page {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        clear: Option<bool>,
    },
}

impl Event {
    pub fn go_to(url: impl Into<String>) -> Self {
        Self::GoTo { url: url.into() }
    }

    pub fn page(name: impl Into<String>) -> Self {
        Self::Page {
            name: name.into(),
            clear: None,
        }
    }

    pub fn clear_page(name: impl Into<String>) -> Self {
        Self::Page {
            name: name.into(),
            clear: Some(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Event>,
}

impl Link {
    pub fn new(text: impl Into<String>, on_click: Event) -> Self {
        Self {
            components: vec![Component::text(text)],
            on_click: Some(on_click),
        }
    }

    pub fn go_to(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, Event::go_to(url))
    }

    pub fn back(text: impl Into<String>) -> Self {
        Self::new(text, Event::Back)
    }

    /// Text of the first text child, if any.
    pub fn label(&self) -> Option<&str> {
        self.components.iter().find_map(|c| match c {
            Component::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn url(&self) -> Option<&str> {
        match &self.on_click {
            Some(Event::GoTo { url }) => Some(url),
            _ => None,
        }
    }
}

impl From<Link> for Component {
    fn from(link: Link) -> Self {
        Component::Link(link)
    }
}

/// Serializers for links that sit outside the [`Component`] enum (table
/// cells, navbar and footer slots) but must still carry `"type": "Link"`.
pub(crate) mod tagged {
    use serde::{Serialize, Serializer};

    use super::{Component, Link};

    pub fn link<S: Serializer>(link: &Link, serializer: S) -> Result<S::Ok, S::Error> {
        Component::Link(link.clone()).serialize(serializer)
    }

    pub fn optional_link<S: Serializer>(
        link: &Option<Link>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        link.clone().map(Component::Link).serialize(serializer)
    }

    pub fn links<S: Serializer>(links: &[Link], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(links.iter().cloned().map(Component::Link))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Button,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_type: Option<ButtonType>,
}

impl Button {
    pub fn new(text: impl Into<String>, on_click: Event) -> Self {
        Self {
            text: text.into(),
            on_click: Some(on_click),
            html_type: Some(ButtonType::Button),
        }
    }
}

impl From<Button> for Component {
    fn from(button: Button) -> Self {
        Component::Button(button)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navbar {
    pub title: String,
    pub title_event: Event,
    #[serde(serialize_with = "tagged::links")]
    pub start_links: Vec<Link>,
    #[serde(serialize_with = "tagged::links")]
    pub end_links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(serialize_with = "tagged::links")]
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_text: Option<String>,
}

/// Column of a [`Table`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLookup {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_width_percent: Option<u8>,
}

impl DisplayLookup {
    const DEFAULT_WIDTH_PERCENT: u8 = 10;

    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: None,
            table_width_percent: Some(Self::DEFAULT_WIDTH_PERCENT),
        }
    }

    pub fn titled(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new(field)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub data: Vec<TableRow>,
    pub columns: Vec<DisplayLookup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data_message: Option<String>,
}

impl Table {
    pub fn new<R>(rows: impl IntoIterator<Item = R>, columns: Vec<DisplayLookup>) -> Self
    where
        R: Into<TableRow>,
    {
        Self {
            data: rows.into_iter().map(Into::into).collect(),
            columns,
            no_data_message: None,
        }
    }

    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = Some(message.into());
        self
    }
}

impl From<Table> for Component {
    fn from(table: Table) -> Self {
        Component::Table(table)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl From<Pagination> for Component {
    fn from(pagination: Pagination) -> Self {
        Component::Pagination(pagination)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Default,
    Page,
}

/// Form the client submits to `submit_url` as `multipart/form-data`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelForm {
    pub form_fields: Vec<FormField>,
    pub submit_url: String,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<Component>>,
}

impl ModelForm {
    pub fn post(
        form_fields: Vec<FormField>,
        submit_url: impl Into<String>,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            form_fields,
            submit_url: submit_url.into(),
            method: "POST",
            display_mode: Some(display_mode),
            footer: None,
        }
    }
}

impl From<ModelForm> for Component {
    fn from(form: ModelForm) -> Self {
        Component::ModelForm(form)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum FormField {
    FormFieldInput(InputField),
    FormFieldTextarea(TextareaField),
    FormFieldSelect(SelectField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub name: String,
    pub title: String,
    pub required: bool,
    pub locked: bool,
    pub html_type: InputType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaField {
    pub name: String,
    pub title: String,
    pub required: bool,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField {
    pub name: String,
    pub title: String,
    pub required: bool,
    pub locked: bool,
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
}

impl FormField {
    pub fn input(name: &str, title: &str, required: bool, html_type: InputType) -> Self {
        Self::FormFieldInput(InputField {
            name: name.to_string(),
            title: title.to_string(),
            required,
            locked: false,
            html_type,
            placeholder: None,
        })
    }

    pub fn textarea(name: &str, title: &str) -> Self {
        Self::FormFieldTextarea(TextareaField {
            name: name.to_string(),
            title: title.to_string(),
            required: false,
            locked: false,
            rows: Some(3),
        })
    }

    pub fn select(name: &str, title: &str, options: Vec<SelectOption>) -> Self {
        Self::FormFieldSelect(SelectField {
            name: name.to_string(),
            title: title.to_string(),
            required: true,
            locked: false,
            initial: options.first().map(|o| o.value.clone()),
            options,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::FormFieldInput(f) => &f.name,
            Self::FormFieldTextarea(f) => &f.name,
            Self::FormFieldSelect(f) => &f.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Modal {
    pub title: String,
    pub body: Vec<Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<Component>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_trigger: Option<Event>,
}

impl From<Modal> for Component {
    fn from(modal: Modal) -> Self {
        Component::Modal(modal)
    }
}
