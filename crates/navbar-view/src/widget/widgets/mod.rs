//! Concrete widgets.

mod bottom_navigation_bar;

pub use bottom_navigation_bar::BottomNavigationBar;
