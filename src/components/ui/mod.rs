pub mod badge;
pub mod button;
pub mod card;
pub mod icon;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use icon::{Icon, IconName};
