pub mod provisioner_rest_controller;
