mod health;
mod helpers;
mod mocks;
mod orders;
