mod blog_index;
mod blog_post;
mod landing;
mod not_found;

pub use blog_index::BlogIndex;
pub use blog_post::BlogPost;
pub use landing::LandingPage;
pub use not_found::NotFound;
