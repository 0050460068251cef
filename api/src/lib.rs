// data types shared by the site's state containers and pages
//
// everything here is static or in-memory; the only outbound call is the
// contact form relay
pub mod contact;
pub mod feedback;
pub mod product;
pub mod roadmap;
pub mod theme;
