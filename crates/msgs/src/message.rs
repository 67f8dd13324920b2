use std::fmt;

use xmsg_bits::Bits;

macro_rules! bit_message {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) Bits);

        impl $name {
            pub fn as_bits(&self) -> &Bits {
                &self.0
            }

            pub fn into_bits(self) -> Bits {
                self.0
            }

            pub fn nbits(&self) -> usize {
                self.0.nbits()
            }
        }

        impl From<$name> for Bits {
            fn from(msg: $name) -> Self {
                msg.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

bit_message!(
    /// A 160-bit core-to-accelerator command.
    RoccCmdMsg
);
bit_message!(
    /// A 69-bit accelerator-to-core response.
    RoccRespMsg
);
bit_message!(
    /// A memory request. Its width depends on the [MemMsgConfig](crate::MemMsgConfig) of the
    /// codec that built it.
    MemReqMsg
);
bit_message!(
    /// A memory response. Its width depends on the [MemMsgConfig](crate::MemMsgConfig) of
    /// the codec that built it.
    MemRespMsg
);
