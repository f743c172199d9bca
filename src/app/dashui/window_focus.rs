//! Common interface for the floating windows of the application.

use eframe::egui;

/// A floating window that the shell can draw and raise.
///
/// # Example
/// ```rust,ignore
/// impl FocusableWindow for HelpWindow {
///     type ShowParams = ();
///
///     fn window_id(&self) -> &'static str { "help_window" }
///     fn window_title(&self) -> String { "Help".to_string() }
///     fn is_open(&self) -> bool { self.open }
///
///     fn show_with_focus(&mut self, ctx: &egui::Context, _params: (), bring_to_front: bool) {
///         let window = apply_focus_order(egui::Window::new("Help"), bring_to_front);
///         window.show(ctx, |ui| { /* ... */ });
///     }
/// }
/// ```
pub trait FocusableWindow {
    /// Extra data the window needs to draw itself; `()` for most.
    type ShowParams;

    /// Unique across the application; also used as the egui window id.
    fn window_id(&self) -> &'static str;

    /// Matches the title bar text.
    fn window_title(&self) -> String;

    fn is_open(&self) -> bool;

    /// Draw the window if it is open. With `bring_to_front` the window is
    /// placed in `egui::Order::Foreground`.
    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    );
}

pub type SimpleShowParams = ();

pub fn apply_focus_order(window: egui::Window<'_>, bring_to_front: bool) -> egui::Window<'_> {
    if bring_to_front {
        window.order(egui::Order::Foreground)
    } else {
        window
    }
}
