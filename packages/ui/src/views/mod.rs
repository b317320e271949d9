mod sidebar_layout;
pub use sidebar_layout::SidebarLayoutView;

mod home;
pub use home::HomeView;

mod ip_tracker;
pub use ip_tracker::IpTrackerView;

mod phone_tracker;
pub use phone_tracker::PhoneTrackerView;

mod username_tracker;
pub use username_tracker::UsernameTrackerView;

mod my_ip;
pub use my_ip::MyIpView;
