mod render;
mod sections;
mod selection;
mod support;
