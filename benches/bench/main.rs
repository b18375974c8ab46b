// third-party imports
use criterion::criterion_main;

const GROUP: &str = "hostmask";
const ND: &str = ":"; // name delimiter

mod acl;
mod mask;

criterion_main!(mask::benches, acl::benches);
