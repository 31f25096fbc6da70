mod activity_envelope;
mod preferences;
mod role;
mod theme;
