mod license_flow;
