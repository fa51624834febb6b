mod support;

mod provisioner_endpoint_tests;
