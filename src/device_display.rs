pub mod impl_console;
#[cfg(test)]
mod impl_console_test;
pub mod impl_fake;
pub mod impl_gui;
#[cfg(test)]
mod impl_gui_test;
pub mod interface;
