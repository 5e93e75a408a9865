//! Workspace-level integration tests for FibScroll live under `tests/`.
