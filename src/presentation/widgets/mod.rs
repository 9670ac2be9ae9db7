mod benefit_cards;
mod callout;
mod code_sample;
mod control_panel;
mod footer_bar;
mod header_bar;
mod help_popup;
mod panel_view;

pub use benefit_cards::BenefitCards;
pub use callout::Callout;
pub use code_sample::CodeSample;
pub use control_panel::ControlPanel;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use help_popup::HelpPopup;
pub use panel_view::PanelView;
