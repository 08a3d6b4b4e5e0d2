pub mod animation;
pub mod config;
pub mod content;
pub mod controller;
pub mod dom;
pub mod hooks;

pub mod components {
    pub mod icon;
    pub mod nav;
    pub mod reveal;
    pub mod section_heading;
}

pub mod sections {
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod location;
    pub mod reviews;
    pub mod services;
}

pub mod pages {
    pub mod home;
}
