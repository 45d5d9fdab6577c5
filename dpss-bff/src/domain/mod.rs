//! UI-side domain: the component tree, table rows and forms

pub mod components;
pub mod forms;
pub mod rows;

pub use components::{
    Button, Component, Components, DisplayLookup, DisplayMode, Event, Link, Modal, ModelForm,
    Pagination, Table,
};
pub use forms::{FormError, FormValues, ProjectConfigForm, ScanConfigForm};
